use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page::Page;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Page title="Homeopathy for Children" path="welcome" sticky_header={false}>
                <p>
                    {"Gentle, individual treatment for babies, children and teenagers. Every consultation looks at the whole child: their health history, temperament, sleep, appetite and the things that make them feel better or worse."}
                </p>
                <p>
                    {"Homeopathy can be used alongside conventional medicine and is suitable from birth."}
                </p>
            </Page>
            <Page title="What I Treat" path="treatments">
                <ul>
                    <li>{"Eczema and other skin complaints"}</li>
                    <li>{"Recurring colds, ear and throat infections"}</li>
                    <li>{"Sleep problems and night terrors"}</li>
                    <li>{"Anxiety, tantrums and behavioural difficulties"}</li>
                    <li>{"Teething, colic and digestive upsets"}</li>
                    <li>{"Hay fever and allergies"}</li>
                </ul>
            </Page>
            <Page title="Consultations" path="consultations">
                <p>
                    {"The first consultation takes about an hour and a half, follow-ups around forty five minutes. Consultations are available in person or by video call."}
                </p>
                <p>
                    {"Send me a short message through the "}
                    <Link<Route> to={Route::Appointment}>{"appointment page"}</Link<Route>>
                    {" and I will get back to you with possible dates."}
                </p>
            </Page>
        </>
    }
}
