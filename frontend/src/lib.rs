pub mod api;
pub mod components;
pub mod config;
pub mod styles;

use std::cell::RefCell;
use std::rc::Rc;

use spin_wheel_core::constants::DEFAULT_GENERATE_COUNT;
use spin_wheel_core::{Prize, SpinFrame, Wheel};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlAudioElement};
use yew::prelude::*;

use crate::components::{Controls, WheelCanvas, WinnerModal};

const WIN_SOUND_URL: &str = "https://assets.mixkit.co/sfx/preview/mixkit-winning-chimes-2015.mp3";
const WIN_SOUND_VOLUME: f64 = 0.5;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(callback: &FrameCallback) {
    if let (Some(window), Some(closure)) = (window(), callback.borrow().as_ref()) {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

/// Whether the frame loop should schedule another frame. Any other frame
/// ends the loop and releases its closure.
fn keeps_animating(frame: &SpinFrame) -> bool {
    matches!(frame, SpinFrame::Spinning { .. })
}

fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

fn play_win_sound() {
    match HtmlAudioElement::new_with_src(WIN_SOUND_URL) {
        Ok(audio) => {
            audio.set_volume(WIN_SOUND_VOLUME);
            // Autoplay may be blocked; the result is purely cosmetic
            let _ = audio.play();
        }
        Err(e) => log::warn!("Could not create win sound: {:?}", e),
    }
}

fn snapshot(wheel: &Rc<RefCell<Wheel>>) -> Vec<Prize> {
    wheel.borrow().prizes().as_slice().to_vec()
}

#[function_component(App)]
pub fn app() -> Html {
    let winner = use_state(|| None::<Prize>);
    let sound_enabled = use_state(|| true);
    // Read when a spin ends, so toggling mid-spin takes effect
    let sound_flag = use_mut_ref(|| true);

    let wheel = {
        let winner = winner.clone();
        let sound_flag = sound_flag.clone();
        use_mut_ref(move || {
            let mut wheel = Wheel::default();
            wheel.engine_mut().set_on_spin_end(move |prize| {
                if *sound_flag.borrow() {
                    play_win_sound();
                }
                winner.set(Some(prize.clone()));
            });
            wheel
        })
    };
    let prizes = {
        let wheel = wheel.clone();
        use_state(move || snapshot(&wheel))
    };
    let rotation = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);
    let is_generating = use_state(|| false);

    let on_spin = {
        let wheel = wheel.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();

        Callback::from(move |_: MouseEvent| {
            if wheel.borrow_mut().spin(js_sys::Date::now()).is_none() {
                return;
            }
            is_spinning.set(true);

            let f: FrameCallback = Rc::new(RefCell::new(None));
            let g = f.clone();

            let wheel = wheel.clone();
            let rotation = rotation.clone();
            let is_spinning = is_spinning.clone();

            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let frame = wheel.borrow_mut().tick(js_sys::Date::now());
                rotation.set(frame.rotation());

                if keeps_animating(&frame) {
                    request_frame(&f);
                    return;
                }

                // Finished fired the spin-end callback inside `tick`
                is_spinning.set(false);
                // Breaks the Rc cycle; wasm-bindgen frees the closure once this call returns
                drop(f.borrow_mut().take());
            }) as Box<dyn FnMut()>));

            request_frame(&g);
        })
    };

    let on_add = {
        let wheel = wheel.clone();
        let prizes = prizes.clone();
        Callback::from(move |text: String| {
            let result = wheel.borrow_mut().add_prize(&text);
            match result {
                Ok(prize) => {
                    log::info!("Added prize {}", prize.text);
                    prizes.set(snapshot(&wheel));
                }
                Err(e) => alert(&e.to_string()),
            }
        })
    };

    let on_remove = {
        let wheel = wheel.clone();
        let prizes = prizes.clone();
        Callback::from(move |id: String| {
            let result = wheel.borrow_mut().remove_prize(&id);
            match result {
                Ok(_) => prizes.set(snapshot(&wheel)),
                Err(e) => alert(&e.to_string()),
            }
        })
    };

    let on_generate = {
        let wheel = wheel.clone();
        let prizes = prizes.clone();
        let is_generating = is_generating.clone();
        Callback::from(move |theme: String| {
            if *is_generating {
                return;
            }
            is_generating.set(true);

            let wheel = wheel.clone();
            let prizes = prizes.clone();
            let is_generating = is_generating.clone();
            spawn_local(async move {
                match api::generate_prizes(&theme, DEFAULT_GENERATE_COUNT).await {
                    Ok(texts) => {
                        let result = wheel.borrow_mut().replace_prizes(texts);
                        match result {
                            Ok(()) => prizes.set(snapshot(&wheel)),
                            Err(e) => alert(&e.to_string()),
                        }
                    }
                    Err(message) => alert(&message),
                }
                is_generating.set(false);
            });
        })
    };

    let on_close_winner = {
        let winner = winner.clone();
        Callback::from(move |_: ()| winner.set(None))
    };

    let on_toggle_sound = {
        let sound_enabled = sound_enabled.clone();
        let sound_flag = sound_flag.clone();
        Callback::from(move |_: MouseEvent| {
            let enabled = !*sound_enabled;
            *sound_flag.borrow_mut() = enabled;
            sound_enabled.set(enabled);
        })
    };

    html! {
        <div class={styles::PAGE}>
            <header class={styles::HEADER}>
                <div class={styles::HEADER_INNER}>
                    <div class="flex items-center gap-2">
                        <div class={styles::BRAND_BADGE}>{"幸"}</div>
                        <h1 class={styles::BRAND_TITLE}>{"幸运大转盘"}</h1>
                    </div>
                    <button class={styles::BUTTON_ICON} onclick={on_toggle_sound}>
                        { if *sound_enabled { "🔊" } else { "🔇" } }
                    </button>
                </div>
            </header>

            <main class={styles::MAIN}>
                <div class={styles::WHEEL_PANEL}>
                    <WheelCanvas
                        prizes={(*prizes).clone()}
                        rotation={*rotation}
                        is_spinning={*is_spinning}
                        on_spin={on_spin}
                    />
                    <p class={styles::TEXT_HINT}>
                        { if *is_spinning { "祝你好运！" } else { "点击中间按钮开始抽奖" } }
                    </p>
                </div>

                <div class="w-full lg:w-[400px]">
                    <Controls
                        prizes={(*prizes).clone()}
                        is_spinning={*is_spinning}
                        is_generating={*is_generating}
                        on_add={on_add}
                        on_remove={on_remove}
                        on_generate={on_generate}
                    />
                </div>
            </main>

            <WinnerModal winner={(*winner).clone()} on_close={on_close_winner} />
        </div>
    }
}
