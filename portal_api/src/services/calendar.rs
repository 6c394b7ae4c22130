use crate::{client::Base, query::AccessModuleQuery, types::Envelope, Client, Error};

impl Client {
    /// Fetches the academic calendar for `year`.
    pub async fn get_academic_calendar(&self, year: u16) -> Result<Envelope, Error> {
        let year = year.to_string();
        let url = self.url(
            Base::Academic,
            &["calendar", year.as_str()],
            None::<&AccessModuleQuery>,
        )?;
        self.execute(self.get_request(url)).await
    }
}
