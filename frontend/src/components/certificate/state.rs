//! Component state for the certificate request flow.

use yew::prelude::*;

use super::helpers::FormErrors;

/// Which card occupies the form slot: the request form, or the success card
/// holding the download action.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Form,
    Success,
}

/// Main state container for the `CertificateComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct CertificateComponent {
    /// Field values as currently displayed (cpf/telefone keep their mask).
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub cpf: String,
    pub endereco: String,

    /// Inline validation errors from the last submit attempt. Rebuilt from
    /// scratch on every attempt, never merged with a previous set.
    pub errors: FormErrors,

    /// True while the validate request is in flight. Disabling the submit
    /// button off this flag is the only guard against double submits.
    pub submitting: bool,

    /// Card currently shown.
    pub stage: Stage,

    /// In-memory copy of the download token; sessionStorage holds the
    /// reload fallback.
    pub download_id: Option<String>,

    /// True while the download request is in flight.
    pub downloading: bool,

    /// Message for the inline download error panel, when visible.
    pub download_error: Option<String>,

    /// Reference to the CPF input, rewritten in place when the mask runs.
    pub cpf_ref: NodeRef,

    /// Reference to the telefone input, rewritten in place when the mask runs.
    pub telefone_ref: NodeRef,
}

impl CertificateComponent {
    pub fn new() -> Self {
        Self {
            nome: String::new(),
            email: String::new(),
            telefone: String::new(),
            cpf: String::new(),
            endereco: String::new(),
            errors: FormErrors::default(),
            submitting: false,
            stage: Stage::Form,
            download_id: None,
            downloading: false,
            download_error: None,
            cpf_ref: Default::default(),
            telefone_ref: Default::default(),
        }
    }
}
