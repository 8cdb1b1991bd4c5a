//! Card container the heat map and its tooltip are drawn into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Maximum width of the card in pixels
    #[props(default = 1400)]
    pub max_width: u32,
    pub children: Element,
}

/// A white card with room for the SVG surface.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "max-width: {}px; margin: 0 auto; padding: 24px; background: white; border-radius: 12px; box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12); overflow-x: auto;",
        props.max_width
    );

    rsx! {
        div {
            style: "{style}",
            {props.children}
        }
    }
}
