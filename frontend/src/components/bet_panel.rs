use shared::contract::{format_ether, validate_bet, BetBreakdown, MIN_BET_WEI};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::outcome::GameConfigResponse;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct BetPanelProps {
    pub amount: String,
    pub config: Option<GameConfigResponse>,
    pub disabled: bool,
    pub on_change: Callback<String>,
}

#[function_component(BetPanel)]
pub fn bet_panel(props: &BetPanelProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let Some(game_config) = props.config.as_ref() else {
        return html! {
            <div class={styles::CARD}>
                <p class={styles::TEXT_SMALL}>{"Loading game limits..."}</p>
            </div>
        };
    };

    let checked = validate_bet(&props.amount, game_config.max_bet);
    let breakdown = checked
        .as_ref()
        .ok()
        .map(|wei| BetBreakdown::new(*wei, &game_config.config));

    html! {
        <div class={styles::CARD}>
            <label class={styles::TEXT_LABEL} for="bet-amount">{"Bet (ETH)"}</label>
            <input
                id="bet-amount"
                type="text"
                inputmode="decimal"
                value={props.amount.clone()}
                disabled={props.disabled}
                {oninput}
                class={if checked.is_ok() { styles::INPUT } else { styles::INPUT_ERROR }}
            />
            <p class={styles::TEXT_HINT}>
                {format!("Min {} ETH, max {} ETH", format_ether(MIN_BET_WEI), format_ether(game_config.max_bet))}
            </p>
            {
                match (&checked, breakdown) {
                    (Err(e), _) => html! { <p class={styles::TEXT_ERROR}>{e.to_string()}</p> },
                    (Ok(_), Some(breakdown)) => html! {
                        <dl class="mt-3 grid grid-cols-2 gap-1 text-sm">
                            <dt class={styles::TEXT_SECONDARY}>
                                {format!("Dev fee ({}%)", game_config.config.dev_fee_percentage)}
                            </dt>
                            <dd class="text-right">{format!("{} ETH", format_ether(breakdown.dev_fee))}</dd>
                            <dt class={styles::TEXT_SECONDARY}>{"Total"}</dt>
                            <dd class="text-right font-semibold">{format!("{} ETH", format_ether(breakdown.total_required))}</dd>
                            <dt class={styles::TEXT_SECONDARY}>{"Potential win"}</dt>
                            <dd class="text-right text-green-600 dark:text-green-400">
                                {format!("{} ETH", format_ether(breakdown.potential_win))}
                            </dd>
                        </dl>
                    },
                    (Ok(_), None) => html! {},
                }
            }
        </div>
    }
}
