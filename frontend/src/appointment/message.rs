use chrono::NaiveDate;
use urlencoding::encode;

use super::age::describe_age_iso;
use super::customer::Customer;
use crate::config;

/// Which submit button started the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    Email,
    Sms,
    WhatsApp,
}

impl Channel {
    pub fn label(self) -> &'static str {
        match self {
            Channel::Email => "Send Email",
            Channel::Sms => "Send SMS",
            Channel::WhatsApp => "WhatsApp",
        }
    }
}

/// Where the practice receives messages.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeContact {
    pub email: String,
    pub phone: String,
    /// International number without `+`, as wa.me expects.
    pub whatsapp: String,
}

impl Default for PracticeContact {
    fn default() -> Self {
        Self {
            email: config::PRACTICE_EMAIL.to_string(),
            phone: config::PRACTICE_PHONE.to_string(),
            whatsapp: config::WHATSAPP_NUMBER.to_string(),
        }
    }
}

pub fn email_subject(customer: &Customer) -> String {
    format!("From {} parents of {}", customer.name, customer.child_name)
}

pub fn email_body(customer: &Customer, today: NaiveDate) -> String {
    format!(
        "Parent:\t\t{}\n\
         Child:\t\t{}\n\
         Date of Birth:\t{}\n\
         Email:\t\t{}\n\
         Phone:\t\t{}\n\
         Address:\t{}\n\
         \n\
         {}",
        customer.name,
        customer.child_name,
        date_of_birth_line(customer, today),
        customer.email,
        customer.phone,
        customer.address,
        customer.message,
    )
}

/// Body shared by SMS and WhatsApp. Leaves out the postal address.
pub fn text_body(customer: &Customer, today: NaiveDate) -> String {
    format!(
        "Parent: {}\n\
         Child: {}\n\
         Date of Birth: {}\n\
         Email: {}\n\
         Phone: {}\n\
         \n\
         {}",
        customer.name,
        customer.child_name,
        date_of_birth_line(customer, today),
        customer.email,
        customer.phone,
        customer.message,
    )
}

fn date_of_birth_line(customer: &Customer, today: NaiveDate) -> String {
    let age = describe_age_iso(&customer.child_dob, today);
    if age.is_empty() {
        customer.child_dob.clone()
    } else {
        format!("{} ({})", customer.child_dob, age)
    }
}

pub fn email_link(customer: &Customer, today: NaiveDate, contact: &PracticeContact) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        contact.email,
        encode(&email_subject(customer)),
        encode(&email_body(customer, today)),
    )
}

pub fn sms_link(customer: &Customer, today: NaiveDate, contact: &PracticeContact) -> String {
    format!("sms:{}?body={}", contact.phone, encode(&text_body(customer, today)))
}

pub fn whatsapp_link(customer: &Customer, today: NaiveDate, contact: &PracticeContact) -> String {
    format!(
        "https://wa.me/{}?text={}",
        contact.whatsapp,
        encode(&text_body(customer, today)),
    )
}

pub fn build_link(
    channel: Channel,
    customer: &Customer,
    today: NaiveDate,
    contact: &PracticeContact,
) -> String {
    match channel {
        Channel::Email => email_link(customer, today, contact),
        Channel::Sms => sms_link(customer, today, contact),
        Channel::WhatsApp => whatsapp_link(customer, today, contact),
    }
}
