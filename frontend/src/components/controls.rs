use spin_wheel_core::palette::{DEFAULT_THEMES, RANDOM_THEME};
use spin_wheel_core::Prize;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

// Themes offered as one-click chips
const QUICK_THEME_COUNT: usize = 4;

#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub prizes: Vec<Prize>,
    pub is_spinning: bool,
    pub is_generating: bool,
    pub on_add: Callback<String>,
    pub on_remove: Callback<String>,
    pub on_generate: Callback<String>,
}

/// Generation replaces the list, which the wheel refuses mid-spin.
fn generation_blocked(is_generating: bool, is_spinning: bool) -> bool {
    is_generating || is_spinning
}

#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    let new_prize_text = use_state(String::new);
    let generate_disabled = generation_blocked(props.is_generating, props.is_spinning);
    let theme_text = use_state(String::new);

    let on_submit_prize = {
        let new_prize_text = new_prize_text.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = new_prize_text.trim().to_string();
            if text.is_empty() {
                return;
            }
            on_add.emit(text);
            new_prize_text.set(String::new());
        })
    };

    let on_generate_click = {
        let theme_text = theme_text.clone();
        let on_generate = props.on_generate.clone();
        Callback::from(move |_: MouseEvent| {
            on_generate.emit((*theme_text).clone());
            theme_text.set(String::new());
        })
    };

    let chips = DEFAULT_THEMES
        .iter()
        .take(QUICK_THEME_COUNT)
        .map(|theme| (*theme, *theme))
        .chain(std::iter::once(("🎲 随机", RANDOM_THEME)))
        .map(|(label, theme)| {
            let on_generate = props.on_generate.clone();
            html! {
                <button
                    key={theme}
                    class={styles::CHIP}
                    disabled={generate_disabled}
                    onclick={Callback::from(move |_: MouseEvent| on_generate.emit(theme.to_string()))}
                >
                    { label }
                </button>
            }
        })
        .collect::<Html>();

    let rows = props
        .prizes
        .iter()
        .map(|prize| {
            let on_remove = props.on_remove.clone();
            let id = prize.id.clone();
            html! {
                <div key={prize.id.clone()} class={styles::PRIZE_ROW}>
                    <div class="flex items-center gap-3">
                        <div class="w-4 h-4 rounded-full shadow-sm" style={format!("background-color: {}", prize.color)}></div>
                        <span class="text-sm font-medium">{ &prize.text }</span>
                    </div>
                    <button
                        class={styles::BUTTON_REMOVE}
                        disabled={props.is_spinning}
                        onclick={Callback::from(move |_: MouseEvent| on_remove.emit(id.clone()))}
                    >
                        {"🗑"}
                    </button>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class={styles::CONTROLS_PANEL}>
            <div class="space-y-3">
                <h3 class={classes!(styles::SECTION_TITLE, "text-purple-300")}>{"✨ AI 主题生成"}</h3>
                <div class="flex gap-2">
                    <input
                        type="text"
                        class={styles::INPUT}
                        placeholder="例如：'午餐吃什么' 或 '惩罚挑战'"
                        value={(*theme_text).clone()}
                        oninput={
                            let theme_text = theme_text.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                theme_text.set(input.value());
                            })
                        }
                    />
                    <button
                        class={styles::BUTTON_GENERATE}
                        disabled={generate_disabled}
                        onclick={on_generate_click}
                    >
                        { if props.is_generating { "…" } else { "生成" } }
                    </button>
                </div>
                <div class="flex flex-wrap gap-2">{ chips }</div>
            </div>

            <hr class="border-slate-700" />

            <div class="flex-1 overflow-hidden flex flex-col min-h-[300px]">
                <h3 class={classes!(styles::SECTION_TITLE, "mb-3")}>
                    {"当前选项 "}
                    <span class="text-slate-400 text-sm">{ format!("({})", props.prizes.len()) }</span>
                </h3>

                <form onsubmit={on_submit_prize} class="flex gap-2 mb-4">
                    <input
                        type="text"
                        class={styles::INPUT}
                        placeholder="添加新选项..."
                        value={(*new_prize_text).clone()}
                        oninput={
                            let new_prize_text = new_prize_text.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                new_prize_text.set(input.value());
                            })
                        }
                    />
                    <button type="submit" class={styles::BUTTON_ADD} disabled={props.is_spinning}>{"+"}</button>
                </form>

                <div class="flex-1 overflow-y-auto space-y-2 pr-1">{ rows }</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_blocked_while_spinning_or_generating() {
        assert!(!generation_blocked(false, false));
        assert!(generation_blocked(true, false));
        assert!(generation_blocked(false, true));
        assert!(generation_blocked(true, true));
    }
}
