/// Messages driving the certificate request flow.
pub enum Msg {
    EditNome(String),
    EditEmail(String),
    EditTelefone(String),
    EditCpf(String),
    EditEndereco(String),
    /// Submit action: clear previous errors, validate locally, then call the
    /// service if everything passes.
    Submit,
    /// Outcome of `POST /validate`; `Ok` carries the download token, `Err`
    /// the message for the blocking alert.
    SubmitFinished(Result<String, String>),
    /// Download action on the success card.
    Download,
    /// Outcome of the download request; `Ok` carries the bundle bytes, `Err`
    /// the message for the inline error panel.
    DownloadFinished(Result<Vec<u8>, String>),
}
