use yew::{html, Component, Context, Html};

use crate::components::certificate::CertificateComponent;
use crate::scroll::anchor_callback;

/// Root component: the static landing shell around the certificate form.
/// Navigation links scroll smoothly to their section instead of jumping.
pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                { build_header() }
                <main>
                    { build_hero() }
                    <section id="validacao" class="form-section">
                        <CertificateComponent />
                    </section>
                    { build_how_it_works() }
                </main>
                { build_footer() }
            </>
        }
    }
}

fn build_header() -> Html {
    html! {
        <header class="site-header">
            <span class="brand">{"CertDigital"}</span>
            <nav>
                <a href="#validacao" onclick={anchor_callback("#validacao")}>{"Validação"}</a>
                <a href="#como-funciona" onclick={anchor_callback("#como-funciona")}>{"Como funciona"}</a>
            </nav>
        </header>
    }
}

fn build_hero() -> Html {
    html! {
        <section class="hero">
            <h1>{"Certificado digital de teste em minutos"}</h1>
            <p>{"Preencha seus dados, valide e baixe o arquivo .pfx na hora."}</p>
            <a class="cta" href="#validacao" onclick={anchor_callback("#validacao")}>
                {"Solicitar certificado"}
            </a>
        </section>
    }
}

fn build_how_it_works() -> Html {
    html! {
        <section id="como-funciona" class="info-section">
            <h2>{"Como funciona"}</h2>
            <ol>
                <li>{"Informe nome, e-mail, telefone, CPF e endereço."}</li>
                <li>{"Validamos os dados e geramos o certificado de teste."}</li>
                <li>{"Baixe o arquivo certificado.pfx — o link vale para um único download."}</li>
            </ol>
        </section>
    }
}

fn build_footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{"CertDigital — certificados de demonstração, sem validade jurídica."}</p>
        </footer>
    }
}
