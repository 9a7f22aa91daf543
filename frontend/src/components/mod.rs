//! UI Components for the GalacticCollectibles frontend.
//!
//! # Layout Components
//! - [`HomePage`] - Landing page mounted at `/`
//!
//! # Feature Components
//! - [`MoreInfo`] - Banner image with the project blurb
//!
//! Static components describe themselves as a [`ViewNode`] tree and go
//! through [`render_node`]; `tests/render.rs` checks the mounted DOM
//! against the tree in a browser.

use leptos::*;

use crate::ViewNode;

mod home;
mod more_info;

pub use home::*;
pub use more_info::*;

/// Turn a view tree into Leptos DOM nodes.
pub fn render_node(node: &ViewNode) -> View {
    match node {
        ViewNode::Text { text } => text.clone().into_view(),
        ViewNode::Element { tag, attrs, children } => {
            let mut el = html::custom(html::Custom::new(*tag));
            for (name, value) in attrs {
                el = el.attr(*name, value.clone());
            }
            for child in children {
                el = el.child(render_node(child));
            }
            el.into_view()
        }
    }
}
