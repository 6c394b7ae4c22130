use serde::Serialize;

use crate::{client::Base, query::AccessModuleQuery, types::Envelope, Client, Error};

impl Client {
    /// Fetches a single teacher by ID.
    pub async fn get_teacher(&self, teacher_id: &str) -> Result<Envelope, Error> {
        let url = self.url(
            Base::Academic,
            &["teacher", teacher_id],
            None::<&AccessModuleQuery>,
        )?;
        self.execute(self.get_request(url)).await
    }

    /// Fetches the exams a teacher invigilates or sets.
    pub async fn get_exam_schedule(&self, teacher_id: &str) -> Result<Envelope, Error> {
        let url = self.url(
            Base::Academic,
            &["teacher", teacher_id, "exams"],
            None::<&AccessModuleQuery>,
        )?;
        self.execute(self.get_request(url)).await
    }

    /// Fetches the HR tasks assigned to a teacher.
    pub async fn get_tasks(&self, teacher_id: &str) -> Result<Envelope, Error> {
        let url = self.url(
            Base::Academic,
            &["teacher", teacher_id, "tasks"],
            None::<&AccessModuleQuery>,
        )?;
        self.execute(self.get_request(url)).await
    }

    pub async fn create_task<B: Serialize + ?Sized>(&self, task: &B) -> Result<Envelope, Error> {
        let url = self.url(
            Base::Academic,
            &["teacher", "tasks"],
            None::<&AccessModuleQuery>,
        )?;
        self.execute(self.post_request(url, task)?).await
    }
}
