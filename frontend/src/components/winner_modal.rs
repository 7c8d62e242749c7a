use spin_wheel_core::Prize;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinnerModalProps {
    pub winner: Option<Prize>,
    pub on_close: Callback<()>,
}

#[function_component(WinnerModal)]
pub fn winner_modal(props: &WinnerModalProps) -> Html {
    let Some(winner) = &props.winner else {
        return html! {};
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={styles::MODAL_BACKDROP}>
            <div class={styles::MODAL_CARD} style={format!("box-shadow: 0 0 40px {}55", winner.color)}>
                <button
                    onclick={on_close.clone()}
                    class="absolute top-4 right-4 text-slate-400 hover:text-white transition-colors"
                >
                    {"✕"}
                </button>

                <div class="mb-6 text-5xl">{"🏆"}</div>
                <h2 class="text-2xl font-bold text-slate-200 mb-2">{"结果出炉！"}</h2>

                <div class="py-6">
                    <p class={styles::MODAL_WINNER}>{ &winner.text }</p>
                </div>

                <button onclick={on_close} class={styles::MODAL_BUTTON}>
                    {"再转一次"}
                </button>
            </div>
        </div>
    }
}
