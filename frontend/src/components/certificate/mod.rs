//! Certificate request flow: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and the pure form helpers (input masks and validation).
//!
//! Responsibilities
//! - Re-export the component types (`Msg`, `CertificateComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On creation, recover a download token persisted by an earlier submit in
//!   this tab, so a reload can still claim its certificate.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use helpers::FormErrors;
pub use messages::Msg;
pub use state::{CertificateComponent, Stage};

use crate::session;

impl Component for CertificateComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let mut component = CertificateComponent::new();
        component.download_id = session::load();
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
