//! "What's GalacticCollectibles?" info panel.
//!
//! A full-width banner image with a blurred card laid over it. The panel
//! has no props and no state; [`more_info_view`] always returns the same
//! tree and [`MoreInfo`] renders exactly that tree.

use leptos::*;

use super::render_node;
use crate::ViewNode;

/// Banner image, relative to wherever static assets are served.
pub const BANNER_SRC: &str = "bg.png";

pub const HEADING: &str = "What's GalacticCollectibles ?";

pub const BLURB: &str = "This project aims to revolutionize the way amateur astronomers engage with the cosmos by creating a dedicated NFT marketplace and community. This platform will empower enthusiasts to explore, share, and monetize their astronomical discoveries through non-fungible tokens (NFTs). By combining blockchain technology, community collaboration, and educational resources, the project seeks to foster a thriving ecosystem for amateur astronomers.";

const CARD_CLASS: &str = "flex gradient sm:max-w-xl max-w-md border-2 border-gray-400 absolute \
    sm:-bottom-12 sm:right-10 rounded-xl backdrop-blur-md flex-col px-6 py-3 \
    justify-center items-center text-center";

/// Build the panel's view tree.
pub fn more_info_view() -> ViewNode {
    let banner = ViewNode::element("div").with_class("w-full").with_child(
        ViewNode::element("img")
            .with_attr("src", BANNER_SRC)
            // decorative
            .with_attr("alt", "")
            .with_class("w-full"),
    );

    let card = ViewNode::element("div")
        .with_class(CARD_CLASS)
        .with_child(
            ViewNode::element("h1")
                .with_class("font-mono text-4xl sm:text-5xl py-4")
                .with_child(ViewNode::text(HEADING)),
        )
        .with_child(
            ViewNode::element("p")
                .with_class("text-xl")
                .with_child(ViewNode::text(BLURB)),
        );

    ViewNode::element("div")
        .with_class("w-full relative")
        .with_child(banner)
        .with_child(
            ViewNode::element("div")
                .with_class("w-full flex justify-center items-center")
                .with_child(card),
        )
}

#[component]
pub fn MoreInfo() -> impl IntoView {
    log::debug!("🔭 Rendering MoreInfo panel");
    render_node(&more_info_view())
}
