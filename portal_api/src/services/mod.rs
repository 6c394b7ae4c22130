//! Service methods, one per backend endpoint. Each builds a request
//! descriptor and hands it to [`crate::Client::execute`].

mod admin;
mod calendar;
mod login;
mod student;
mod teacher;
