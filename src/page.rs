//! Page: element references resolved once at start.
//!
//! Components receive these handles instead of querying the document ad hoc,
//! so a missing element is known up front and the component stays inert.

use crate::config::Selectors;
use crate::dom::Dom;

/// The modal and its content slots. Present only when all four resolve.
#[derive(Debug, Clone)]
pub struct ModalParts<N> {
    pub root: N,
    pub title: N,
    pub desc: N,
    pub link: N,
    pub close_buttons: Vec<N>,
}

/// Menu toggle and the container it controls.
#[derive(Debug, Clone)]
pub struct MenuParts<N> {
    pub toggle: N,
    pub nav_links: N,
    pub links: Vec<N>,
}

#[derive(Debug, Clone)]
pub struct Page<N> {
    pub body: Option<N>,
    pub header: Option<N>,
    pub modal: Option<ModalParts<N>>,
    pub cards: Vec<N>,
    pub menu: Option<MenuParts<N>>,
    pub reveal_targets: Vec<N>,
    pub anchors: Vec<N>,
    pub buttons: Vec<N>,
    pub lazy_images: Vec<N>,
    pub copyright: Option<N>,
}

impl<N: Clone + PartialEq> Page<N> {
    pub fn resolve<D: Dom<Node = N>>(dom: &D, s: &Selectors) -> Self {
        let modal = match (
            dom.element_by_id(&s.modal_id),
            dom.element_by_id(&s.modal_title_id),
            dom.element_by_id(&s.modal_desc_id),
            dom.element_by_id(&s.modal_link_id),
        ) {
            (Some(root), Some(title), Some(desc), Some(link)) => Some(ModalParts {
                root,
                title,
                desc,
                link,
                close_buttons: dom.query_all(&s.close_modal),
            }),
            (None, ..) => None,
            _ => {
                tracing::warn!(modal = %s.modal_id, "modal found without all content slots; modal disabled");
                None
            }
        };

        let menu = match (dom.query(&s.menu_toggle), dom.query(&s.nav_links)) {
            (Some(toggle), Some(nav_links)) => Some(MenuParts {
                toggle,
                nav_links,
                links: dom.query_all(&s.nav_link),
            }),
            _ => None,
        };

        let page = Self {
            body: dom.query(&s.body),
            header: dom.query(&s.header),
            modal,
            cards: dom.query_all(&s.project_card),
            menu,
            reveal_targets: dom.query_all(&s.reveal),
            anchors: dom.query_all(&s.anchor),
            buttons: dom.query_all(&s.button),
            lazy_images: dom.query_all(&s.lazy_image),
            copyright: dom.query(&s.copyright),
        };
        tracing::debug!(
            cards = page.cards.len(),
            modal = page.modal.is_some(),
            menu = page.menu.is_some(),
            reveal = page.reveal_targets.len(),
            anchors = page.anchors.len(),
            buttons = page.buttons.len(),
            lazy_images = page.lazy_images.len(),
            "page resolved"
        );
        page
    }
}
