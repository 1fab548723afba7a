pub mod age;
pub mod customer;
pub mod launcher;
pub mod message;

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Local, NaiveDate};
use log::{error, info};
use yew::prelude::*;

use crate::components::form::{Button, Input, TextArea};
use crate::components::page::Page;
use customer::Customer;
use launcher::{LaunchError, Launcher, UriOpener};
use message::{build_link, Channel, PracticeContact};

/// Normalizes the customer, builds the link for `channel` and opens it.
/// Returns the link that was handed to the opener.
pub fn submit(
    customer: &Customer,
    channel: Channel,
    today: NaiveDate,
    contact: &PracticeContact,
    opener: &dyn UriOpener,
) -> Result<String, LaunchError> {
    let customer = customer.normalized();
    let uri = build_link(channel, &customer, today, contact);
    opener.open(&uri)?;
    Ok(uri)
}

fn field_setter(
    customer: &Rc<RefCell<Customer>>,
    apply: fn(&mut Customer, String),
) -> Callback<String> {
    let customer = customer.clone();
    Callback::from(move |value: String| apply(&mut customer.borrow_mut(), value))
}

fn channel_setter<E: 'static>(trigger: &Rc<RefCell<Channel>>, channel: Channel) -> Callback<E> {
    let trigger = trigger.clone();
    Callback::from(move |_: E| *trigger.borrow_mut() = channel)
}

#[derive(Properties, PartialEq)]
pub struct AppointmentProps {
    #[prop_or_default]
    pub launcher: Launcher,
    #[prop_or_default]
    pub contact: PracticeContact,
}

#[function_component(Appointment)]
pub fn appointment(props: &AppointmentProps) -> Html {
    // Field values live in the DOM, no re-render needed when they change.
    let customer = use_mut_ref(Customer::default);
    let trigger = use_mut_ref(Channel::default);

    let onsubmit = {
        let customer = customer.clone();
        let trigger = trigger.clone();
        let launcher = props.launcher.clone();
        let contact = props.contact.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            e.stop_propagation();

            let channel = *trigger.borrow();
            let today = Local::now().date_naive();
            info!("Sending appointment request via {:?}", channel);
            match submit(&customer.borrow(), channel, today, &contact, &launcher) {
                Ok(_) => info!("Handed appointment request to the {:?} handler", channel),
                Err(e) => error!("Could not open {:?} link: {}", channel, e),
            }
        })
    };

    html! {
        <Page title="Appointment" path="appointment">
            <p>
                {"Please message me briefly about your child's problems, what treatment he/she has received and what you expect from the consultation. I will be able to decide whether your child would benefit from Homeopathy or not and then I will offer your child possible appointment dates / times."}
            </p>
            <p>{"Use the contact form below to reach out to me."}</p>
            <form style="display: flex; flex-direction: column; padding: 1rem 0rem;" action="#" {onsubmit}>
                <Input
                    name="name"
                    title="Name"
                    placeholder="Enter your name"
                    container_style="margin-bottom: 1rem;"
                    oninput={field_setter(&customer, |c, v| c.name = v)}
                />
                <div style="display: flex; flex-direction: row;">
                    <Input
                        name="email"
                        title="Email"
                        input_type="email"
                        inputmode="email"
                        placeholder="Enter your email"
                        container_style="flex-grow: 1; margin-bottom: 1rem; margin-right: 1rem;"
                        oninput={field_setter(&customer, |c, v| c.email = v)}
                    />
                    <Input
                        name="phone"
                        title="Phone"
                        input_type="tel"
                        inputmode="tel"
                        placeholder="Enter your phone number"
                        container_style="flex-grow: 1; margin-bottom: 1rem;"
                        oninput={field_setter(&customer, |c, v| c.phone = v)}
                    />
                </div>
                <Input
                    name="address"
                    title="Address"
                    placeholder="Enter your address"
                    container_style="margin-bottom: 1rem;"
                    oninput={field_setter(&customer, |c, v| c.address = v)}
                />
                <Input
                    name="childName"
                    title="Child Name"
                    placeholder="Enter the child's name"
                    container_style="margin-bottom: 1rem;"
                    oninput={field_setter(&customer, |c, v| c.child_name = v)}
                />
                <Input
                    name="childDob"
                    title="Child Date of Birth"
                    input_type="date"
                    placeholder="Select a date"
                    container_style="margin-bottom: 1rem;"
                    oninput={field_setter(&customer, |c, v| c.child_dob = v)}
                />
                <TextArea
                    name="message"
                    title="Message"
                    placeholder="What is ailing your child ?"
                    style="margin-bottom: 1rem; height: 10rem;"
                    oninput={field_setter(&customer, |c, v| c.message = v)}
                />
                <div style="display: flex; flex-direction: row;">
                    <Button style="margin-right: 1rem;" onclick={channel_setter::<MouseEvent>(&trigger, Channel::Email)}>
                        {Channel::Email.label()}
                    </Button>
                    <Button onclick={channel_setter::<MouseEvent>(&trigger, Channel::Sms)}>
                        {Channel::Sms.label()}
                    </Button>
                    <Button style="margin-left: 1rem;" onclick={channel_setter::<MouseEvent>(&trigger, Channel::WhatsApp)}>
                        {Channel::WhatsApp.label()}
                    </Button>
                </div>
            </form>
        </Page>
    }
}

#[cfg(test)]
mod tests {
    use super::launcher::testing::RecordingOpener;
    use super::*;
    use urlencoding::decode;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn contact() -> PracticeContact {
        PracticeContact {
            email: "clinic@example.org".to_string(),
            phone: "+441234567890".to_string(),
            whatsapp: "441234567890".to_string(),
        }
    }

    fn raw_customer() -> Customer {
        Customer {
            name: "john smith".to_string(),
            email: "john@example.com".to_string(),
            phone: "07700900456".to_string(),
            address: "12 high street".to_string(),
            child_name: "amy".to_string(),
            child_dob: "2020-03-10".to_string(),
            message: "Hay fever every spring".to_string(),
        }
    }

    #[test]
    fn email_submission_opens_normalized_mailto() {
        let recorder = RecordingOpener::default();
        let uri = submit(&raw_customer(), Channel::Email, today(), &contact(), &recorder).unwrap();

        assert_eq!(*recorder.opened.borrow(), vec![uri.clone()]);
        assert!(uri.starts_with("mailto:clinic@example.org?"));

        let decoded = decode(&uri).unwrap();
        assert!(decoded.contains("From JohnSmith parents of Amy"));
        assert!(decoded.contains("12HighStreet"));
        assert!(decoded.contains("2020-03-10 (3 year's)"));
    }

    #[test]
    fn sms_and_whatsapp_submissions() {
        let recorder = RecordingOpener::default();
        submit(&raw_customer(), Channel::Sms, today(), &contact(), &recorder).unwrap();
        submit(&raw_customer(), Channel::WhatsApp, today(), &contact(), &recorder).unwrap();

        let opened = recorder.opened.borrow();
        assert_eq!(opened.len(), 2);
        assert!(opened[0].starts_with("sms:+441234567890?body="));
        assert!(opened[1].starts_with("https://wa.me/441234567890?text="));
        for uri in opened.iter() {
            let decoded = decode(uri).unwrap();
            assert!(decoded.contains("JohnSmith"));
            assert!(!decoded.contains("12HighStreet"));
        }
    }

    #[test]
    fn opener_failure_is_reported() {
        let recorder = RecordingOpener { fail: true, ..Default::default() };
        let result = submit(&raw_customer(), Channel::Email, today(), &contact(), &recorder);

        assert!(matches!(result, Err(LaunchError::NoWindow)));
        assert!(recorder.opened.borrow().is_empty());
    }

    #[test]
    fn field_setter_writes_into_shared_state() {
        let customer = Rc::new(RefCell::new(Customer::default()));
        field_setter(&customer, |c, v| c.child_name = v).emit("amy".to_string());
        assert_eq!(customer.borrow().child_name, "amy");

    }

    #[test]
    fn untouched_trigger_sends_email() {
        let trigger = Rc::new(RefCell::new(Channel::default()));
        let recorder = RecordingOpener::default();

        submit(&raw_customer(), *trigger.borrow(), today(), &contact(), &recorder).unwrap();

        assert!(recorder.opened.borrow()[0].starts_with("mailto:"));
    }

    #[test]
    fn last_pressed_button_picks_the_channel() {
        let trigger = Rc::new(RefCell::new(Channel::default()));
        channel_setter::<()>(&trigger, Channel::Sms).emit(());
        channel_setter::<()>(&trigger, Channel::WhatsApp).emit(());

        let recorder = RecordingOpener::default();
        submit(&raw_customer(), *trigger.borrow(), today(), &contact(), &recorder).unwrap();

        let opened = recorder.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("https://wa.me/441234567890?text="));
    }
}
