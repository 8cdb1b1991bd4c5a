//! Chart header component with title and dataset description.

use dioxus::prelude::*;
use gtv_data::scene::regions;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Base temperature and covered years
    #[props(default = String::new())]
    pub description: String,
}

/// Header for the chart showing the `#title` and `#description` regions.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "text-align: center; margin-bottom: 16px;",
            h1 {
                id: regions::TITLE,
                style: "margin: 0 0 8px 0; font-size: 28px; color: #3949AB;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    id: regions::DESCRIPTION,
                    style: "margin: 0 auto; max-width: 720px; font-size: 15px; color: #555;",
                    "{props.description}"
                }
            }
        }
    }
}
