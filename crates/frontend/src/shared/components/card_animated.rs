//! CardAnimated: Thaw [`Card`] with an entrance animation.
//!
//! The `card-appear` keyframes live in `layout.css`; timing comes from
//! [`crate::shared::motion`].
//!
//! ```ignore
//! <CardAnimated delay_ms=motion::stagger_delay(index)>
//!     <h3>{name}</h3>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

use crate::shared::motion;

#[component]
pub fn CardAnimated(
    /// Entrance delay in milliseconds (stagger effect)
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes
    #[prop(optional, into)]
    class: String,
    /// Extra inline styles, appended after the animation
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let animation = motion::animation_style("card-appear", motion::DURATION_BASE_MS, delay_ms);
    let full_style = if style.is_empty() {
        animation
    } else {
        format!("{} {}", animation, style)
    };

    view! {
        <Card class=format!("inventory-card {}", class) attr:style=full_style>
            {children()}
        </Card>
    }
}
