use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::form::{BannerKind, BannerTicket, ContactForm, SubmitOutcome, SubmitPhase};
use super::transport::{default_transport, ContactTransport, SubmitError};
use super::validator::FieldKind;
use crate::config;

pub enum ContactMsg {
    Input(FieldKind, String),
    Blur(FieldKind),
    Submit,
    Sent(Result<(), SubmitError>),
    HideBanner(BannerTicket),
}

pub struct ContactSection {
    form: ContactForm,
    transport: Rc<dyn ContactTransport>,
    field_refs: [NodeRef; 3],
    hide_timer: Option<Timeout>,
}

impl Component for ContactSection {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::new(),
            transport: default_transport(),
            field_refs: Default::default(),
            hide_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Input(field, value) => {
                self.form.set_value(field, value);
                true
            }
            ContactMsg::Blur(field) => {
                self.form.validate(field);
                true
            }
            ContactMsg::Submit => {
                match self.form.submit() {
                    SubmitOutcome::Accepted(snapshot) => {
                        info!("Contact form valid, sending");
                        let transport = self.transport.clone();
                        ctx.link().send_future(async move {
                            ContactMsg::Sent(transport.send(&snapshot).await)
                        });
                    }
                    SubmitOutcome::Rejected { focus } => {
                        info!("Contact form rejected, focusing {}", focus.as_str());
                        if let Some(input) = self.field_refs[focus.index()].cast::<HtmlElement>() {
                            if let Err(e) = input.focus() {
                                debug!("Could not focus {}: {:?}", focus.as_str(), e);
                            }
                        }
                    }
                    SubmitOutcome::Busy => return false,
                }
                true
            }
            ContactMsg::Sent(result) => {
                if let Err(e) = &result {
                    warn!("Contact submission failed: {}", e);
                }
                let ticket = self.form.finish(result);
                let link = ctx.link().clone();
                // Replacing the handle drops the previous timer, which cancels it.
                self.hide_timer = Some(Timeout::new(config::BANNER_HIDE_MS, move || {
                    link.send_message(ContactMsg::HideBanner(ticket));
                }));
                true
            }
            ContactMsg::HideBanner(ticket) => {
                let hidden = self.form.hide_banner(ticket);
                if hidden {
                    self.hide_timer = None;
                }
                hidden
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let sending = self.form.phase() == SubmitPhase::Sending;

        let banner_class = match self.form.banner() {
            Some(banner) if banner.kind == BannerKind::Failure => "form-success show error",
            Some(_) => "form-success show",
            None => "form-success",
        };
        let banner_text = self.form.banner().map(|b| b.text.clone()).unwrap_or_default();

        html! {
            <form class="contact-form" {onsubmit}>
                { self.input_row(ctx, FieldKind::Name, "Your Name", "text") }
                { self.input_row(ctx, FieldKind::Email, "Your Email", "email") }
                { self.textarea_row(ctx) }
                <button type="submit" class="btn btn-primary" disabled={sending}>
                    { if sending { "Sending..." } else { "Send Message" } }
                </button>
                <div class={banner_class} role="status">{ banner_text }</div>
            </form>
        }
    }
}

impl ContactSection {
    fn border_style(&self, field: FieldKind) -> &'static str {
        if self.form.error(field).is_some() {
            "border-color: #ef4444;"
        } else {
            ""
        }
    }

    fn error_slot(&self, field: FieldKind) -> Html {
        html! {
            <span class="error-message">{ self.form.error(field).unwrap_or_default() }</span>
        }
    }

    fn input_row(
        &self,
        ctx: &Context<Self>,
        field: FieldKind,
        label: &'static str,
        input_type: &'static str,
    ) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::Input(field, input.value())
        });
        let onblur = ctx.link().callback(move |_: FocusEvent| ContactMsg::Blur(field));

        html! {
            <div class="form-group">
                <label for={field.as_str()}>{ label }</label>
                <input
                    type={input_type}
                    id={field.as_str()}
                    name={field.as_str()}
                    required=true
                    ref={self.field_refs[field.index()].clone()}
                    value={self.form.value(field).to_string()}
                    style={self.border_style(field)}
                    {oninput}
                    {onblur}
                />
                { self.error_slot(field) }
            </div>
        }
    }

    fn textarea_row(&self, ctx: &Context<Self>) -> Html {
        let field = FieldKind::Message;
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Input(field, input.value())
        });
        let onblur = ctx.link().callback(move |_: FocusEvent| ContactMsg::Blur(field));

        html! {
            <div class="form-group">
                <label for={field.as_str()}>{ "Your Message" }</label>
                <textarea
                    id={field.as_str()}
                    name={field.as_str()}
                    rows="5"
                    required=true
                    ref={self.field_refs[field.index()].clone()}
                    value={self.form.value(field).to_string()}
                    style={self.border_style(field)}
                    {oninput}
                    {onblur}
                />
                { self.error_slot(field) }
            </div>
        }
    }
}
