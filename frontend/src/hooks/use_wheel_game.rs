use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use shared::animation::rotation_at;
use shared::shared_wheel_game::{RoundResult, WheelGame, RESULT_DISPLAY_MS};
use shared::{SpinConfig, SpinResolver, SpinResult, WheelColor, WheelState};
use yew::prelude::*;

/// Wheel orientation and round bookkeeping. Lives in a ref so every callback
/// reads the settled state, not a render snapshot.
#[derive(Default)]
struct Session {
    wheel: WheelState,
    game: WheelGame,
}

#[derive(Clone)]
pub struct UseWheelGameHandle {
    pub wheel: WheelState,
    pub game: WheelGame,
    /// Rotation currently drawn, between the old and new `total_rotation`
    /// while a spin animates.
    pub rotation: f64,
    /// Takes the spin guard for the chosen color. Fails if a spin is running.
    pub start: Callback<WheelColor, Result<(), String>>,
    /// Animates to the authoritative color. Requires `start` first.
    pub land: Callback<WheelColor, Result<SpinResult, String>>,
    /// Releases the guard when no outcome arrived.
    pub cancel: Callback<()>,
}

#[hook]
pub fn use_wheel_game(config: SpinConfig, on_finished: Callback<RoundResult>) -> UseWheelGameHandle {
    let session = use_mut_ref(Session::default);
    let rotation = use_state(|| 0.0_f64);
    let frame = use_mut_ref(|| None::<AnimationFrame>);
    let hide_timer = use_mut_ref(|| None::<Timeout>);
    let update = use_force_update();

    {
        let frame = frame.clone();
        let hide_timer = hide_timer.clone();
        use_effect_with((), move |_| {
            move || {
                frame.borrow_mut().take();
                hide_timer.borrow_mut().take();
            }
        });
    }

    let start = {
        let session = session.clone();
        let update = update.clone();
        Callback::from(move |chosen: WheelColor| -> Result<(), String> {
            session
                .borrow_mut()
                .game
                .start_spin(chosen)
                .map_err(|e| e.to_string())?;
            update.force_update();
            Ok(())
        })
    };

    let cancel = {
        let session = session.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            session.borrow_mut().game.cancel_spin();
            update.force_update();
        })
    };

    let land = {
        let session = session.clone();
        let rotation = rotation.clone();
        let frame = frame.clone();
        let hide_timer = hide_timer.clone();
        let update = update.clone();

        Callback::from(move |target: WheelColor| -> Result<SpinResult, String> {
            let (result, start_rotation) = {
                let session = session.borrow();
                if !session.game.is_spinning {
                    return Err("No spin in progress".to_string());
                }
                let result = SpinResolver::new(config)
                    .map_err(|e| e.to_string())?
                    .resolve(&session.wheel, target)
                    .map_err(|e| e.to_string())?;
                (result, session.wheel.total_rotation)
            };

            let finish = {
                let session = session.clone();
                let hide_timer = hide_timer.clone();
                let update = update.clone();
                let on_finished = on_finished.clone();
                move || {
                    let round = {
                        let mut session = session.borrow_mut();
                        session.wheel.apply(&result);
                        session.game.complete_spin(result.decoded_color)
                    };
                    update.force_update();

                    match round {
                        Ok(round) => {
                            on_finished.emit(round);
                            let session = session.clone();
                            let update = update.clone();
                            *hide_timer.borrow_mut() = Some(Timeout::new(RESULT_DISPLAY_MS, move || {
                                session.borrow_mut().game.hide_result();
                                update.force_update();
                            }));
                        }
                        Err(e) => log::error!("Wheel stopped with no round in progress: {}", e),
                    }
                }
            };

            animate(
                Tween {
                    from: start_rotation,
                    to: result.css_rotation,
                    started_at: js_sys::Date::now(),
                    duration_ms: f64::from(config.spin_duration_ms),
                },
                rotation.clone(),
                frame.clone(),
                Box::new(finish),
            );
            Ok(result)
        })
    };

    let snapshot = session.borrow();
    UseWheelGameHandle {
        wheel: snapshot.wheel,
        game: snapshot.game.clone(),
        rotation: *rotation,
        start,
        land,
        cancel,
    }
}

#[derive(Clone, Copy)]
struct Tween {
    from: f64,
    to: f64,
    started_at: f64,
    duration_ms: f64,
}

fn animate(
    tween: Tween,
    rotation: UseStateHandle<f64>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    finish: Box<dyn FnOnce()>,
) {
    let next_frame = frame.clone();
    let handle = request_animation_frame(move |_| {
        let elapsed = js_sys::Date::now() - tween.started_at;
        rotation.set(rotation_at(tween.from, tween.to, elapsed, tween.duration_ms));

        if elapsed >= tween.duration_ms {
            next_frame.borrow_mut().take();
            finish();
        } else {
            animate(tween, rotation, next_frame, finish);
        }
    });
    *frame.borrow_mut() = Some(handle);
}
