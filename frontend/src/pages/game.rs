use shared::contract::validate_bet;
use shared::shared_wheel_game::RoundResult;
use shared::WheelColor;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{BetPanel, ColorPicker, ResultDisplay, SpinButton, WheelCanvas};
use crate::config;
use crate::hooks::use_wheel_game;
use crate::outcome::{GameConfigResponse, OutcomeSource};
use crate::sound::{Sound, SoundBank};
use crate::styles;

const DEFAULT_BET: &str = "0.0001";

#[function_component(GamePage)]
pub fn game_page() -> Html {
    let source = use_memo((), |_| OutcomeSource::from_environment());
    let sounds = use_memo((), |_| SoundBank::load());
    let spin_config = use_memo((), |_| config::spin_config());

    let game_config = use_state(|| None::<GameConfigResponse>);
    let selected = use_state(|| None::<WheelColor>);
    let bet_amount = use_state(|| DEFAULT_BET.to_string());
    let pending = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let muted = use_state(|| false);

    let on_finished = {
        let sounds = sounds.clone();
        Callback::from(move |round: RoundResult| {
            sounds.stop(Sound::Spin);
            sounds.play(if round.is_win() { Sound::Win } else { Sound::Lose });
            log::info!(
                "🎡 {} chose {} landed {} (+{} points)",
                round.message,
                round.chosen_color,
                round.landed_color,
                round.points
            );
        })
    };
    let wheel = use_wheel_game(*spin_config, on_finished);

    // Fetch bet limits once on mount
    {
        let source = source.clone();
        let game_config = game_config.clone();
        let error_message = error_message.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match source.game_config().await {
                    Ok(limits) => game_config.set(Some(limits)),
                    Err(e) => {
                        log::error!("Failed to load game config: {}", e);
                        error_message.set(Some(e));
                    }
                }
            });
            || ()
        });
    }

    let on_select = {
        let selected = selected.clone();
        let sounds = sounds.clone();
        Callback::from(move |color: WheelColor| {
            sounds.play(Sound::Click);
            selected.set(Some(color));
        })
    };

    let on_bet_change = {
        let bet_amount = bet_amount.clone();
        Callback::from(move |value: String| bet_amount.set(value))
    };

    let on_toggle_mute = {
        let sounds = sounds.clone();
        let muted = muted.clone();
        Callback::from(move |_: MouseEvent| muted.set(sounds.toggle_mute()))
    };

    let on_spin = {
        let source = source.clone();
        let sounds = sounds.clone();
        let selected = selected.clone();
        let bet_amount = bet_amount.clone();
        let game_config = game_config.clone();
        let pending = pending.clone();
        let error_message = error_message.clone();
        let start = wheel.start.clone();
        let land = wheel.land.clone();
        let cancel = wheel.cancel.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(chosen) = *selected else {
                error_message.set(Some("Pick a color first".to_string()));
                return;
            };
            let Some(limits) = (*game_config).as_ref() else {
                return;
            };
            let bet = match validate_bet(&bet_amount, limits.max_bet) {
                Ok(bet) => bet,
                Err(e) => {
                    error_message.set(Some(e.to_string()));
                    return;
                }
            };
            if let Err(e) = start.emit(chosen) {
                log::warn!("Spin rejected: {}", e);
                return;
            }

            error_message.set(None);
            sounds.play(Sound::Click);
            sounds.play(Sound::Spin);
            pending.set(true);

            let source = source.clone();
            let sounds = sounds.clone();
            let pending = pending.clone();
            let error_message = error_message.clone();
            let land = land.clone();
            let cancel = cancel.clone();
            spawn_local(async move {
                let landed = source
                    .play(chosen, bet)
                    .await
                    .and_then(|result| result.result_color().map_err(|e| e.to_string()))
                    .and_then(|target| land.emit(target));
                pending.set(false);

                match landed {
                    Ok(result) => log::debug!(
                        "Landing on {} at {:.2}° after {} turns",
                        result.decoded_color,
                        result.resting_angle,
                        result.rotation_count
                    ),
                    Err(e) => {
                        log::error!("Spin failed: {}", e);
                        sounds.stop(Sound::Spin);
                        cancel.emit(());
                        error_message.set(Some(e));
                    }
                }
            });
        })
    };

    let busy = wheel.game.is_spinning || *pending;
    let is_demo = matches!(*source, OutcomeSource::Local);

    html! {
        <div class="container mx-auto px-4 py-8">
            <div class="flex items-center justify-between max-w-2xl mx-auto mb-6">
                <h1 class={styles::TEXT_H1}>
                    <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">{"MemeSpin"}</span>
                </h1>
                <div class="flex items-center gap-3">
                    if is_demo {
                        <span class={styles::BADGE_DEMO}>{"Demo"}</span>
                    }
                    <span class={styles::TEXT_SECONDARY}>{format!("{} points", wheel.game.points)}</span>
                    <button onclick={on_toggle_mute} class={styles::BUTTON_ICON} title="Toggle sound">
                        { if *muted { "🔇" } else { "🔊" } }
                    </button>
                </div>
            </div>

            <div class={styles::GAME_CARD}>
                <div class="relative mx-auto mb-8 flex justify-center items-center">
                    <div class="w-full max-w-[450px] mx-auto">
                        <WheelCanvas rotation={wheel.rotation} is_spinning={wheel.game.is_spinning} />
                    </div>
                </div>

                if let Some(message) = (*error_message).clone() {
                    <div class="mb-6 text-center">
                        <p class={styles::CARD_ERROR}>{message}</p>
                    </div>
                }

                <div class="space-y-4">
                    <ColorPicker selected={*selected} disabled={busy} {on_select} />
                    <BetPanel
                        amount={(*bet_amount).clone()}
                        config={(*game_config).clone()}
                        disabled={busy}
                        on_change={on_bet_change}
                    />
                    <div class="flex justify-center">
                        <div class="w-full max-w-[300px]">
                            <SpinButton
                                is_spinning={wheel.game.is_spinning}
                                is_pending={*pending}
                                disabled={selected.is_none() || game_config.is_none()}
                                onclick={on_spin}
                            />
                        </div>
                    </div>
                </div>

                <ResultDisplay result={wheel.game.last_result.clone()} show_result={wheel.game.show_result} />
            </div>
        </div>
    }
}
