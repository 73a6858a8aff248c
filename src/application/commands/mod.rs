pub mod job_applications;
pub mod resumes;
pub mod users;
pub mod vacancies;
