use crate::{
    client::Base,
    query::AccessModuleQuery,
    types::{LoginRequest, LoginResponse},
    Client, Error,
};

impl Client {
    /// Exchanges credentials for a session token at the login service.
    ///
    /// Sent with whatever credentials the client holds, which for a fresh
    /// login is none.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, Error> {
        let url = self.url(Base::TeacherLogin, &["login"], None::<&AccessModuleQuery>)?;
        tracing::debug!("Logging in as {}", credentials.username);
        self.execute_as(self.post_request(url, credentials)?).await
    }
}
