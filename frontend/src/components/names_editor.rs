use shared::geometry::wedge_style;
use shared::validation::normalize_name;
use shared::WheelConfig;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct NamesEditorProps {
    pub config: WheelConfig,
    pub on_change: Callback<Vec<String>>,
}

#[function_component(NamesEditor)]
pub fn names_editor(props: &NamesEditorProps) -> Html {
    let names = use_state(Vec::<String>::new);
    let input_ref = use_node_ref();

    let onkeydown = {
        let names = names.clone();
        let input_ref = input_ref.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }
            e.prevent_default();

            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            if let Some(name) = normalize_name(&input.value()) {
                let mut updated = (*names).clone();
                updated.push(name);
                names.set(updated.clone());
                on_change.emit(updated);
            }
            input.set_value("");
        })
    };

    let delete = {
        let names = names.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |index: usize| {
            let mut updated = (*names).clone();
            if index < updated.len() {
                updated.remove(index);
                names.set(updated.clone());
                on_change.emit(updated);
            }
        })
    };

    let count = names.len();

    html! {
        <div class={styles::CARD}>
            <label class={styles::TEXT_LABEL} for="name-input">{"Names"}</label>
            <input
                id="name-input"
                ref={input_ref}
                type="text"
                placeholder="Type a name and press Enter"
                class={styles::INPUT}
                onkeydown={onkeydown}
            />
            <p class={styles::TEXT_HINT}>{format!("{} on the wheel", count)}</p>
            <ul class="mt-4 space-y-2">
                { for names.iter().enumerate().map(|(index, name)| {
                    let background = wedge_style(index, count, &props.config)
                        .map(|style| format!("background: {};", style.fill))
                        .unwrap_or_default();
                    let ondelete = {
                        let delete = delete.clone();
                        Callback::from(move |_: MouseEvent| delete.emit(index))
                    };
                    html! {
                        <li class="flex items-center justify-between rounded-lg px-3 py-2 text-gray-900" style={background}>
                            <span>{name}</span>
                            <button class={styles::BUTTON_ICON} onclick={ondelete} title="Remove">
                                {"✕"}
                            </button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
