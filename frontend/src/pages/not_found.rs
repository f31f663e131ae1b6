use yew::prelude::*;
use yew_router::prelude::*;

use crate::styles;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class={styles::FLEX_CENTER}>
            <div class="text-center">
                <h1 class={styles::TEXT_H1}>{"404"}</h1>
                <p class={classes!(styles::TEXT_BODY, "mt-4")}>{"Nothing to spin here."}</p>
                <div class="mt-6">
                    <Link<Route> to={Route::Home} classes={classes!(styles::LINK)}>{"Back to the wheel"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
