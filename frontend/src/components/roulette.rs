use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::render::Canvas2d;
use shared::{Wheel, WheelConfig};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, FontFace, HtmlCanvasElement};
use yew::prelude::*;
use crate::canvas::HtmlCanvas;
use crate::config::LABEL_FONT_URL;
use crate::styles;

const CANVAS_SIZE: u32 = 500;

#[derive(Properties, PartialEq)]
pub struct RouletteProps {
    pub items: Vec<String>,
    pub config: WheelConfig,
    pub on_winner: Callback<String>,
    pub on_spin_start: Callback<()>,
}

// The one place the canvas gets painted from
fn redraw(wheel: &Wheel, canvas_ref: &NodeRef) {
    let mut surface = canvas_ref
        .cast::<HtmlCanvasElement>()
        .and_then(HtmlCanvas::acquire);
    let _ = wheel.redraw(surface.as_mut().map(|s| s as &mut dyn Canvas2d));
}

async fn load_label_font(family: &str) -> Result<(), JsValue> {
    let font = FontFace::new_with_str(family, LABEL_FONT_URL)?;
    JsFuture::from(font.load()?).await?;
    if let Some(document) = window().and_then(|w| w.document()) {
        document.fonts().add(&font)?;
    }
    Ok(())
}

#[function_component(Roulette)]
pub fn roulette(props: &RouletteProps) -> Html {
    let canvas_ref = use_node_ref();
    let wheel = {
        let config = props.config.clone();
        use_mut_ref(move || Wheel::new(config))
    };
    // Holding the handle keeps the timer alive, replacing it cancels the old one
    let pending = use_mut_ref(|| None::<Timeout>);
    let rotation = use_state(|| 0.0_f64);
    let spinning = use_state(|| false);
    let animate = use_state(|| false);

    // Winner listener
    {
        let wheel = wheel.clone();
        use_effect_with(props.on_winner.clone(), move |on_winner| {
            let on_winner = on_winner.clone();
            wheel
                .borrow_mut()
                .on_winner(move |name| on_winner.emit(name.to_string()));
            || ()
        });
    }

    // Display font, fetched once; labels use the fallback face until then
    {
        let wheel = wheel.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let family = wheel.borrow().font().family().to_string();
            spawn_local(async move {
                match load_label_font(&family).await {
                    Ok(()) => {
                        wheel.borrow_mut().font_loaded();
                        redraw(&wheel.borrow(), &canvas_ref);
                    }
                    Err(err) => log::warn!("Could not load font '{}': {:?}", family, err),
                }
            });
            || ()
        });
    }

    // New list: reset the wheel and repaint
    {
        let wheel = wheel.clone();
        let canvas_ref = canvas_ref.clone();
        let pending = pending.clone();
        let rotation = rotation.clone();
        let spinning = spinning.clone();
        let animate = animate.clone();
        use_effect_with(props.items.clone(), move |items| {
            pending.borrow_mut().take();
            if let Err(err) = wheel.borrow_mut().set_items(items.clone()) {
                log::warn!("Rejected name list: {}", err);
            }
            animate.set(false);
            rotation.set(0.0);
            spinning.set(false);
            redraw(&wheel.borrow(), &canvas_ref);
            || ()
        });
    }

    // Drop the timer with the component
    {
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                pending.borrow_mut().take();
            }
        });
    }

    let start_spin = {
        let wheel = wheel.clone();
        let canvas_ref = canvas_ref.clone();
        let pending = pending.clone();
        let rotation = rotation.clone();
        let spinning = spinning.clone();
        let animate = animate.clone();
        let on_spin_start = props.on_spin_start.clone();

        Callback::from(move |_: MouseEvent| {
            let plan = match wheel.borrow_mut().spin(js_sys::Date::now()) {
                Ok(plan) => plan,
                Err(err) => {
                    log::warn!("{}", err);
                    return;
                }
            };

            on_spin_start.emit(());
            animate.set(true);
            rotation.set(plan.rotation);
            spinning.set(true);

            let wheel = wheel.clone();
            let canvas_ref = canvas_ref.clone();
            let spinning = spinning.clone();
            let timeout = Timeout::new(plan.settle_after_ms, move || {
                if wheel.borrow_mut().settle(plan.token).is_some() {
                    spinning.set(false);
                    redraw(&wheel.borrow(), &canvas_ref);
                }
            });
            *pending.borrow_mut() = Some(timeout);
        })
    };

    let transition = if *animate {
        format!(
            "transform {}ms cubic-bezier(0.25, 1, 0.5, 1)",
            props.config.spin_duration_ms
        )
    } else {
        "none".to_string()
    };
    let canvas_style = format!("transform: rotate({}rad); transition: {};", *rotation, transition);
    let disabled = *spinning || props.items.is_empty();

    html! {
        <div class={classes!(styles::CARD, "flex", "flex-col", "items-center")}>
            <div class="relative w-full max-w-[500px]">
                // Pointer, fixed at 12 o'clock
                <div class="absolute left-1/2 -top-1 z-10 -translate-x-1/2 w-0 h-0 border-l-[14px] border-r-[14px] border-t-[28px] border-l-transparent border-r-transparent border-t-gray-700 dark:border-t-gray-200"></div>
                <canvas
                    ref={canvas_ref}
                    width={CANVAS_SIZE.to_string()}
                    height={CANVAS_SIZE.to_string()}
                    class="w-full h-auto"
                    style={canvas_style}
                />
            </div>
            <button class={classes!(styles::BUTTON_PRIMARY, "mt-6", "w-full", "max-w-[300px]")} onclick={start_spin} disabled={disabled}>
                { if *spinning { "Spinning..." } else { "Spin" } }
            </button>
            if props.items.is_empty() {
                <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{"Add a name to spin the wheel"}</p>
            }
        </div>
    }
}
