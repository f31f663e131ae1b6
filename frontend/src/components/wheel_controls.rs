use shared::shared_wheel_game::{Outcome, RoundResult};
use shared::WheelColor;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ColorPickerProps {
    pub selected: Option<WheelColor>,
    pub disabled: bool,
    pub on_select: Callback<WheelColor>,
}

#[function_component(ColorPicker)]
pub fn color_picker(props: &ColorPickerProps) -> Html {
    html! {
        <div class="flex justify-center gap-3">
            { for WheelColor::ALL.iter().map(|&color| {
                let selected = props.selected == Some(color);
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(color))
                };
                html! {
                    <button
                        {onclick}
                        disabled={props.disabled}
                        style={format!("background-color: {};", color.hex())}
                        class={classes!(
                            "px-5",
                            "py-2",
                            "rounded-full",
                            "font-bold",
                            "text-white",
                            "shadow",
                            "transition-all",
                            "duration-200",
                            if selected { "ring-4 ring-white scale-105" } else { "opacity-80 hover:opacity-100" },
                            props.disabled.then_some("cursor-not-allowed"),
                        )}
                    >
                        {color.name()}
                    </button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    /// Waiting for the game gateway to settle the bet.
    pub is_pending: bool,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_pending {
        "Placing bet..."
    } else if props.is_spinning {
        "Spinning..."
    } else {
        "Spin"
    };

    let is_disabled = props.disabled || props.is_spinning || props.is_pending;
    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };
    let spin_icon_class = if props.is_spinning || props.is_pending {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 border-2 border-transparent hover:border-white focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50 bg-transparent"
            >
                <div class="flex items-center justify-center relative z-10">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub result: Option<RoundResult>,
    pub show_result: bool,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(result) = props.result.as_ref().filter(|_| props.show_result) else {
        return html! {};
    };

    let (gradient_classes, animation_class) = match result.outcome {
        Outcome::Win => ("from-green-400 to-green-600 border-green-300", "animate-bounce"),
        Outcome::Lose => ("from-red-400 to-red-600 border-red-300", "animate-pulse"),
    };

    html! {
        <div class="mt-6 flex flex-col items-center justify-center">
            <div class={classes!(
                "flex",
                "items-center",
                "justify-center",
                "px-6",
                "py-4",
                "rounded-xl",
                "bg-gradient-to-r",
                "text-white",
                "font-bold",
                "text-2xl",
                "shadow-lg",
                "border-2",
                animation_class,
                gradient_classes
            )}>
                <span>{&result.message}</span>
            </div>
            <div class="text-sm text-gray-600 dark:text-gray-400 mt-3 bg-gray-100 dark:bg-gray-800 px-4 py-2 rounded-full">
                {format!("Landed on {}", result.landed_color)}
                if result.is_win() {
                    {format!(" (+{} points)", result.points)}
                }
            </div>
        </div>
    }
}
