use yew::prelude::*;
use crate::components::{NamesEditor, Roulette, WinnerBanner};
use crate::config::get_wheel_config;
use crate::styles;

pub const TITLE: &str = "Wheel of Names";

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| get_wheel_config());
    let items = use_state(Vec::<String>::new);
    let winner = use_state(|| None::<String>);

    let update_items = {
        let items = items.clone();
        let winner = winner.clone();
        Callback::from(move |new_items: Vec<String>| {
            items.set(new_items);
            winner.set(None);
        })
    };

    let set_winner = {
        let winner = winner.clone();
        Callback::from(move |name: String| winner.set(Some(name)))
    };

    let reset_winner = {
        let winner = winner.clone();
        Callback::from(move |_: ()| winner.set(None))
    };

    html! {
        <div class={styles::CONTAINER}>
            <div class="max-w-6xl mx-auto py-8">
                <h1 class={classes!(styles::TEXT_H1, "text-center", "mb-8")}>{TITLE}</h1>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <div class="md:col-span-1">
                        <NamesEditor config={(*config).clone()} on_change={update_items} />
                    </div>
                    <div class="md:col-span-2">
                        <Roulette
                            items={(*items).clone()}
                            config={(*config).clone()}
                            on_winner={set_winner}
                            on_spin_start={reset_winner}
                        />
                        <WinnerBanner winner={(*winner).clone()} />
                    </div>
                </div>
            </div>
        </div>
    }
}
