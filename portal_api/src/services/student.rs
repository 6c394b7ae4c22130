use serde::Serialize;

use crate::{client::Base, query::AccessModuleQuery, types::Envelope, Client, Error};

impl Client {
    /// Fetches the feedback forms open to a student.
    pub async fn get_feedback_forms(&self, student_id: &str) -> Result<Envelope, Error> {
        let url = self.url(
            Base::Academic,
            &["student", student_id, "feedback-forms"],
            None::<&AccessModuleQuery>,
        )?;
        self.execute(self.get_request(url)).await
    }

    /// Submits a student's answers to a feedback form.
    pub async fn submit_feedback<B: Serialize + ?Sized>(
        &self,
        form_id: &str,
        response: &B,
    ) -> Result<Envelope, Error> {
        let url = self.url(
            Base::Academic,
            &["student", "feedback-forms", form_id, "responses"],
            None::<&AccessModuleQuery>,
        )?;
        self.execute(self.post_request(url, response)?).await
    }

    pub async fn get_placements(&self, student_id: &str) -> Result<Envelope, Error> {
        let url = self.url(
            Base::Academic,
            &["student", student_id, "placements"],
            None::<&AccessModuleQuery>,
        )?;
        self.execute(self.get_request(url)).await
    }
}
