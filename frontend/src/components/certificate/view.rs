//! View rendering for the certificate request flow.
//!
//! Two cards occupy the same slot: the form card while data is being
//! collected, then the success card holding the download action once the
//! service issues a token. Validation errors render inline next to their
//! field; download errors render in a dedicated panel under the button
//! (submit errors, by contrast, go through a blocking alert in `update`).
//!
//! All user-facing copy is in Portuguese, matching the rest of the page.

use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{CertificateComponent, Stage};

/// Main view function: renders whichever card the flow is on.
pub fn view(component: &CertificateComponent, ctx: &Context<CertificateComponent>) -> Html {
    let link = ctx.link();

    match component.stage {
        Stage::Form => build_form_card(component, link),
        Stage::Success => build_success_card(component, link),
    }
}

/// Builds the request form: five fields with inline error slots and the
/// submit button with its busy state.
fn build_form_card(component: &CertificateComponent, link: &Scope<CertificateComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="card form-card" id="formCard">
            <h2>{"Solicite seu certificado"}</h2>
            <form onsubmit={onsubmit} novalidate={true}>
                { text_field(
                    "nome",
                    "text",
                    "Nome completo",
                    "Maria da Silva",
                    &component.nome,
                    component.errors.nome.as_deref(),
                    None,
                    link.callback(|e: InputEvent| {
                        Msg::EditNome(e.target_unchecked_into::<HtmlInputElement>().value())
                    }),
                ) }
                { text_field(
                    "email",
                    "email",
                    "E-mail",
                    "maria@exemplo.com.br",
                    &component.email,
                    component.errors.email.as_deref(),
                    None,
                    link.callback(|e: InputEvent| {
                        Msg::EditEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                    }),
                ) }
                { text_field(
                    "telefone",
                    "tel",
                    "Telefone",
                    "(11) 91234-5678",
                    &component.telefone,
                    component.errors.telefone.as_deref(),
                    Some(component.telefone_ref.clone()),
                    link.callback(|e: InputEvent| {
                        Msg::EditTelefone(e.target_unchecked_into::<HtmlInputElement>().value())
                    }),
                ) }
                { text_field(
                    "cpf",
                    "text",
                    "CPF",
                    "123.456.789-09",
                    &component.cpf,
                    component.errors.cpf.as_deref(),
                    Some(component.cpf_ref.clone()),
                    link.callback(|e: InputEvent| {
                        Msg::EditCpf(e.target_unchecked_into::<HtmlInputElement>().value())
                    }),
                ) }
                { text_field(
                    "endereco",
                    "text",
                    "Endereço completo",
                    "Rua, número, bairro, cidade - UF",
                    &component.endereco,
                    component.errors.endereco.as_deref(),
                    None,
                    link.callback(|e: InputEvent| {
                        Msg::EditEndereco(e.target_unchecked_into::<HtmlInputElement>().value())
                    }),
                ) }
                { build_submit_button(component) }
            </form>
        </div>
    }
}

/// One labelled input with its adjacent error message element. A `Some`
/// error paints the input with the error class and fills the message slot.
#[allow(clippy::too_many_arguments)]
fn text_field(
    id: &'static str,
    input_type: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: &str,
    error: Option<&str>,
    node_ref: Option<NodeRef>,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div class="form-group">
            <label for={id}>{label}</label>
            <input
                id={id}
                type={input_type}
                placeholder={placeholder}
                value={value.to_string()}
                class={classes!(error.is_some().then_some("error"))}
                ref={node_ref.unwrap_or_default()}
                oninput={oninput}
            />
            <span class="error-message" id={format!("{id}Error")}>
                { error.unwrap_or_default() }
            </span>
        </div>
    }
}

fn build_submit_button(component: &CertificateComponent) -> Html {
    html! {
        <button
            type="submit"
            id="submitBtn"
            class={classes!("btn", "btn-primary", component.submitting.then_some("loading"))}
            disabled={component.submitting}
        >
            {
                if component.submitting {
                    html! { <>{ spinner_icon() }{"Validando..."}</> }
                } else {
                    html! { <>{ check_icon() }{"Validar Certificado"}</> }
                }
            }
        </button>
    }
}

/// Builds the success card: download button with busy state and the inline
/// error panel fed by the download flow.
fn build_success_card(
    component: &CertificateComponent,
    link: &Scope<CertificateComponent>,
) -> Html {
    html! {
        <div class="card success-card" id="successCard">
            <h2>{"Certificado gerado com sucesso!"}</h2>
            <p>
                {"Seus dados foram validados. Baixe o arquivo certificado.pfx \
                  abaixo — o link vale para um único download."}
            </p>
            <button
                type="button"
                id="downloadBtn"
                class={classes!("btn", "btn-primary", component.downloading.then_some("loading"))}
                disabled={component.downloading}
                onclick={link.callback(|_| Msg::Download)}
            >
                {
                    if component.downloading {
                        html! { <>{ spinner_icon() }{"Baixando..."}</> }
                    } else {
                        html! { <>{ download_icon() }{"Baixar Certificado"}</> }
                    }
                }
            </button>
            {
                match &component.download_error {
                    Some(message) => html! {
                        <div class="download-error" id="downloadError">
                            <span id="downloadErrorText">{ message.clone() }</span>
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

fn spinner_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"
            stroke-linejoin="round" class="spin">
            <line x1="12" y1="2" x2="12" y2="6" />
            <line x1="12" y1="18" x2="12" y2="22" />
            <line x1="4.93" y1="4.93" x2="7.76" y2="7.76" />
            <line x1="16.24" y1="16.24" x2="19.07" y2="19.07" />
            <line x1="2" y1="12" x2="6" y2="12" />
            <line x1="18" y1="12" x2="22" y2="12" />
            <line x1="4.93" y1="19.07" x2="7.76" y2="16.24" />
            <line x1="16.24" y1="7.76" x2="19.07" y2="4.93" />
        </svg>
    }
}

fn check_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"
            stroke-linejoin="round">
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
            <polyline points="22 4 12 14.01 9 11.01" />
        </svg>
    }
}

fn download_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"
            stroke-linejoin="round">
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
            <polyline points="7 10 12 15 17 10" />
            <line x1="12" y1="15" x2="12" y2="3" />
        </svg>
    }
}
