//! Contact form: field rules, the submit state machine, delivery and the
//! Yew component that wires them to the page.

pub mod component;
pub mod form;
pub mod transport;
pub mod validator;

pub use component::ContactSection;
