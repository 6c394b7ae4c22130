use serde::Serialize;

use crate::{client::Base, query::AccessModuleQuery, types::Envelope, Client, Error};

impl Client {
    /// Fetches every program allocation.
    pub async fn get_program_allocations(&self) -> Result<Envelope, Error> {
        let url = self.url(
            Base::Academic,
            &["admin", "program-allocations"],
            None::<&AccessModuleQuery>,
        )?;
        self.execute(self.get_request(url)).await
    }

    /// Creates a program allocation from the given payload.
    pub async fn create_program_allocation<B: Serialize + ?Sized>(
        &self,
        allocation: &B,
    ) -> Result<Envelope, Error> {
        let url = self.url(
            Base::Academic,
            &["admin", "program-allocations"],
            None::<&AccessModuleQuery>,
        )?;
        self.execute(self.post_request(url, allocation)?).await
    }

    /// Fetches the access module tree.
    pub async fn get_access_modules(&self, query: &AccessModuleQuery) -> Result<Envelope, Error> {
        let url = self.url(Base::Academic, &["admin", "access-modules"], Some(query))?;
        self.execute(self.get_request(url)).await
    }
}
