use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinnerBannerProps {
    pub winner: Option<String>,
}

#[function_component(WinnerBanner)]
pub fn winner_banner(props: &WinnerBannerProps) -> Html {
    match &props.winner {
        Some(name) => html! {
            <div class={classes!(styles::CARD_SUCCESS, "mt-6", "text-center", "text-xl", "font-bold", "animate-bounce")}>
                {format!("The winner is {}!", name)}
            </div>
        },
        None => html! {},
    }
}
