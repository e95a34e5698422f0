//! Update function for the certificate request flow.
//!
//! Elm-style: receives the current state, the component `Context`, and a
//! `Msg`, mutates the state, and returns whether the view must re-render.
//!
//! Each of the two network flows resolves to exactly one completion message
//! (`SubmitFinished` / `DownloadFinished`) whatever the outcome, and those
//! arms clear their busy flag before anything else, so the disabled controls
//! always come back.

use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::certificate::CertificateRequest;

use crate::{api, scroll, session};

use super::helpers::{format_cpf, format_phone, validate, FormErrors};
use super::messages::Msg;
use super::state::{CertificateComponent, Stage};

/// Filename handed to the browser's save flow.
const DOWNLOAD_FILENAME: &str = "certificado.pfx";

/// Shown in the blocking alert when the submit flow fails without any
/// message of its own.
const MSG_SUBMIT_FALLBACK: &str = "Ocorreu um erro ao gerar o certificado. Tente novamente.";
/// Shown in the download panel when the flow is triggered with no live token.
const MSG_NO_TOKEN: &str =
    "Nenhum certificado gerado ainda. Clique em 'Validar Certificado' primeiro.";
/// Shown in the download panel when saving the received bundle fails locally.
const MSG_SAVE_FAILED: &str = "Erro ao baixar o certificado. Tente novamente mais tarde.";

/// Central update function for the component.
pub fn update(
    component: &mut CertificateComponent,
    ctx: &Context<CertificateComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::EditNome(value) => {
            component.nome = value;
            false
        }
        Msg::EditEmail(value) => {
            component.email = value;
            false
        }
        Msg::EditEndereco(value) => {
            component.endereco = value;
            false
        }
        Msg::EditCpf(value) => {
            component.cpf = format_cpf(&value);
            // Write the mask back into the DOM; the keystroke already put the
            // raw text there and the vdom will not touch it on its own.
            if let Some(input) = component.cpf_ref.cast::<HtmlInputElement>() {
                input.set_value(&component.cpf);
            }
            false
        }
        Msg::EditTelefone(value) => {
            component.telefone = format_phone(&value);
            if let Some(input) = component.telefone_ref.cast::<HtmlInputElement>() {
                input.set_value(&component.telefone);
            }
            false
        }
        Msg::Submit => {
            component.errors = FormErrors::default();

            let form = CertificateRequest {
                nome: component.nome.trim().to_string(),
                email: component.email.trim().to_string(),
                telefone: component.telefone.trim().to_string(),
                cpf: component.cpf.trim().to_string(),
                endereco: component.endereco.trim().to_string(),
            };

            let errors = validate(&form);
            if !errors.is_empty() {
                component.errors = errors;
                return true;
            }

            component.submitting = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::request_certificate(&form).await;
                link.send_message(Msg::SubmitFinished(result));
            });
            true
        }
        Msg::SubmitFinished(result) => {
            component.submitting = false;
            match result {
                Ok(download_id) => {
                    session::store(&download_id);
                    component.download_id = Some(download_id);
                    component.stage = Stage::Success;

                    // Let the success card render before scrolling to it.
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(50).await;
                        scroll::scroll_to("#successCard");
                    });
                }
                Err(message) => {
                    error!("Erro ao gerar certificado:", message.clone());
                    let shown = if message.is_empty() {
                        MSG_SUBMIT_FALLBACK.to_string()
                    } else {
                        message
                    };
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&shown);
                    }
                }
            }
            true
        }
        Msg::Download => {
            component.download_error = None;

            match component.download_id.clone().or_else(session::load) {
                None => {
                    component.download_error = Some(MSG_NO_TOKEN.to_string());
                }
                Some(download_id) => {
                    component.downloading = true;
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api::fetch_certificate(&download_id).await;
                        link.send_message(Msg::DownloadFinished(result));
                    });
                }
            }
            true
        }
        Msg::DownloadFinished(result) => {
            component.downloading = false;
            match result {
                Ok(bytes) => match save_certificate(&bytes) {
                    Ok(()) => {
                        // One-shot token: the service forgets it after
                        // serving, so does this side.
                        session::clear();
                        component.download_id = None;
                    }
                    Err(reason) => {
                        error!("Erro ao salvar certificado:", reason);
                        component.download_error = Some(MSG_SAVE_FAILED.to_string());
                    }
                },
                Err(message) => {
                    error!("Erro ao baixar certificado:", message.clone());
                    component.download_error = Some(message);
                }
            }
            true
        }
    }
}

/// Hands the received bundle to the browser's save flow: builds a temporary
/// object URL over the bytes and clicks a synthetic hidden anchor pointing
/// at it. The anchor is removed right away and the URL revoked when the
/// `ObjectUrl` drops at the end of the function.
fn save_certificate(bytes: &[u8]) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let blob = gloo_file::Blob::new(bytes);
    let url = gloo_file::ObjectUrl::from(blob);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "documento indisponível".to_string())?;
    let body = document
        .body()
        .ok_or_else(|| "documento sem body".to_string())?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "não foi possível criar o link de download".to_string())?
        .dyn_into()
        .map_err(|_| "não foi possível criar o link de download".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(DOWNLOAD_FILENAME);
    body.append_child(&anchor)
        .map_err(|_| "não foi possível anexar o link de download".to_string())?;
    anchor.click();
    anchor.remove();

    Ok(())
}
