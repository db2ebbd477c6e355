use super::ContactForm;

#[derive(Debug, Clone)]
pub enum Action {
    FetchGithubStats(String),
    OpenExternal(String),
    SendContact(ContactForm),
}
