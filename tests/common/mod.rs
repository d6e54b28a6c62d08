//! Stock portfolio page built in a MemoryDom.

#![allow(dead_code)]

use folio::{Dom, ElementSpec, MemoryDom, NodeId, Site, SiteConfig};

pub struct Portfolio {
    pub site: Site<MemoryDom>,
    pub header: NodeId,
    pub toggle: NodeId,
    pub nav: NodeId,
    pub nav_links: Vec<NodeId>,
    pub projects: NodeId,
    pub about: NodeId,
    pub cards: Vec<NodeId>,
    pub modal: NodeId,
    pub modal_content: NodeId,
    pub title: NodeId,
    pub desc: NodeId,
    pub link: NodeId,
    pub close: NodeId,
    pub image: NodeId,
    pub hash_button: NodeId,
    pub type_button: NodeId,
    pub mail_button: NodeId,
    pub link_button: NodeId,
    pub logo: NodeId,
    pub broken_anchor: NodeId,
    pub copyright: NodeId,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::with(MemoryDom::new(), SiteConfig::default())
    }

    pub fn with_config(config: SiteConfig) -> Self {
        Self::with(MemoryDom::new(), config)
    }

    pub fn with(mut dom: MemoryDom, config: SiteConfig) -> Self {
        let body = dom.body();

        let header = dom.append(body, ElementSpec::new("header").offset(0.0, 80.0));
        let bar = dom.append(header, ElementSpec::new("nav"));
        let logo = dom.append(bar, ElementSpec::new("a").class("logo").attr("href", "#").text("Me"));
        let toggle = dom.append(
            bar,
            ElementSpec::new("button").class("mobile-menu-btn").attr("aria-expanded", "false"),
        );
        let nav = dom.append(bar, ElementSpec::new("ul").class("nav-links"));
        let li_projects = dom.append(nav, ElementSpec::new("li"));
        let to_projects = dom.append(li_projects, ElementSpec::new("a").attr("href", "#projects").text("Work"));
        let li_about = dom.append(nav, ElementSpec::new("li"));
        let to_about = dom.append(li_about, ElementSpec::new("a").attr("href", "#about").text("About"));

        let projects = dom.append(body, ElementSpec::new("section").id("projects").class("fade-in").offset(600.0, 700.0));
        let alpha = dom.append(
            projects,
            ElementSpec::new("div")
                .class("project-card")
                .attr("data-title", "Alpha")
                .attr("data-desc", "First project")
                .attr("data-link", "https://alpha.example"),
        );
        let beta = dom.append(
            projects,
            ElementSpec::new("div")
                .class("project-card")
                .attr("data-title", "Beta")
                .attr("data-desc", "Second project")
                .attr("data-link", "#"),
        );
        let gamma = dom.append(
            projects,
            ElementSpec::new("div")
                .class("project-card")
                .attr("data-title", "Gamma")
                .attr("data-desc", "Third project"),
        );

        let about = dom.append(body, ElementSpec::new("section").id("about").class("fade-in").offset(1400.0, 500.0));
        let image = dom.append(about, ElementSpec::new("img").class("lazy").attr("data-src", "/img/me.avif"));
        let hash_button = dom.append(about, ElementSpec::new("a").class("btn").attr("href", "#").text("Say hi"));
        let type_button = dom.append(about, ElementSpec::new("button").class("btn").attr("type", "button").text("Download CV"));
        let mail_button = dom.append(about, ElementSpec::new("a").class("btn").attr("href", "mailto:me@example.com").text("Email"));
        let link_button = dom.append(about, ElementSpec::new("a").class("btn").attr("href", "https://github.com/me").text("GitHub"));
        let broken_anchor = dom.append(about, ElementSpec::new("a").attr("href", "#missing").text("Nowhere"));

        let modal = dom.append(body, ElementSpec::new("div").id("projectModal").class("modal"));
        let modal_content = dom.append(modal, ElementSpec::new("div").class("modal-content"));
        let close = dom.append(modal_content, ElementSpec::new("span").class("close-modal").text("×"));
        let title = dom.append(modal_content, ElementSpec::new("h2").id("modalTitle"));
        let desc = dom.append(modal_content, ElementSpec::new("p").id("modalDesc"));
        let link = dom.append(modal_content, ElementSpec::new("a").id("modalLink").text("Live"));

        let footer = dom.append(body, ElementSpec::new("footer"));
        let copyright = dom.append(footer, ElementSpec::new("p").class("copyright").text("© 2025 Example"));

        let site = Site::new(dom, config).expect("site");
        Self {
            site,
            header,
            toggle,
            nav,
            nav_links: vec![to_projects, to_about],
            projects,
            about,
            cards: vec![alpha, beta, gamma],
            modal,
            modal_content,
            title,
            desc,
            link,
            close,
            image,
            hash_button,
            type_button,
            mail_button,
            link_button,
            logo,
            broken_anchor,
            copyright,
        }
    }

    pub fn dom(&self) -> &MemoryDom {
        self.site.dom()
    }

    pub fn text(&self, node: NodeId) -> String {
        self.dom().text(&node)
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.dom().has_class(&node, class)
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.dom().attribute(&node, name)
    }

    pub fn anchor_index(&self, node: NodeId) -> usize {
        self.site.page().anchors.iter().position(|n| *n == node).expect("anchor")
    }

    pub fn button_index(&self, node: NodeId) -> usize {
        self.site.page().buttons.iter().position(|n| *n == node).expect("button")
    }

    pub fn modal_title(&self) -> String {
        self.text(self.title)
    }
}
