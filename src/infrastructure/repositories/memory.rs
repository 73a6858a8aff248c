// src/infrastructure/repositories/memory.rs
//! Process-local storage used when no database is configured and in tests.
//!
//! All four tables live behind one lock. Inserts check their references and
//! deletes cascade while holding it, so no row can point at a missing parent.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::services::Repositories;
use crate::domain::{
    errors::{DomainError, DomainResult},
    job_application::{ApplicationId, ApplicationRepository, JobApplication, NewJobApplication},
    resume::{NewResume, Resume, ResumeId, ResumeRepository},
    user::{Email, NewUser, Role, User, UserId, UserRepository, UserUpdate},
    vacancy::{NewVacancy, Vacancy, VacancyId, VacancyRepository},
};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    vacancies: BTreeMap<i64, Vacancy>,
    resumes: BTreeMap<i64, Resume>,
    applications: BTreeMap<i64, JobApplication>,
    last_id: i64,
}

impl Tables {
    /// Ids are shared across tables; they only need to be unique per table.
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn email_taken(&self, email: &Email, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|user| &user.email == email && Some(user.id) != except)
    }

    fn require_user(&self, id: UserId) -> DomainResult<()> {
        if self.users.contains_key(&id.0) {
            Ok(())
        } else {
            Err(DomainError::not_found("user not found"))
        }
    }

    fn remove_applications(&mut self, keep: impl Fn(&JobApplication) -> bool) -> u64 {
        let before = self.applications.len();
        self.applications.retain(|_, application| keep(application));
        (before - self.applications.len()) as u64
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Hand out the store as every repository port.
    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories {
            users: Arc::clone(self) as Arc<dyn UserRepository>,
            vacancies: Arc::clone(self) as Arc<dyn VacancyRepository>,
            resumes: Arc::clone(self) as Arc<dyn ResumeRepository>,
            applications: Arc::clone(self) as Arc<dyn ApplicationRepository>,
        }
    }
}

fn owned_by<T>(rows: &BTreeMap<i64, T>, matches: impl Fn(&T) -> bool) -> Vec<T>
where
    T: Clone,
{
    rows.values().filter(|row| matches(row)).cloned().collect()
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut tables = self.tables.write().await;
        if tables.email_taken(&new_user.email, None) {
            return Err(DomainError::conflict("email already registered"));
        }

        let id = UserId::new(tables.next_id())?;
        let user = User {
            id,
            email: new_user.email,
            password_hash: new_user.password_hash,
            name: new_user.name,
            role: new_user.role,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        tables.users.insert(id.0, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|user| &user.email == email).cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut tables = self.tables.write().await;
        if let Some(email) = &update.email {
            if tables.email_taken(email, Some(update.id)) {
                return Err(DomainError::conflict("email already registered"));
            }
        }

        let user = tables
            .users
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::not_found("user not found"))?;
        update.apply_to(user);
        Ok(user.clone())
    }

    /// Removes the account together with its vacancies, resumes and every
    /// application touching any of them.
    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut tables = self.tables.write().await;
        if tables.users.remove(&id.0).is_none() {
            return Err(DomainError::not_found("user not found"));
        }

        let vacancies: Vec<VacancyId> = owned_by(&tables.vacancies, |v| v.employer_id == id)
            .into_iter()
            .map(|v| v.id)
            .collect();
        let resumes: Vec<ResumeId> = owned_by(&tables.resumes, |r| r.user_id == id)
            .into_iter()
            .map(|r| r.id)
            .collect();

        tables.remove_applications(|app| {
            app.user_id != id
                && !vacancies.contains(&app.vacancy_id)
                && !resumes.contains(&app.resume_id)
        });
        tables.vacancies.retain(|_, vacancy| vacancy.employer_id != id);
        tables.resumes.retain(|_, resume| resume.user_id != id);
        Ok(())
    }

    async fn list_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.tables.read().await.users.values().cloned().collect())
    }

    async fn count_by_role(&self, role: Role) -> DomainResult<u64> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().filter(|user| user.role == role).count() as u64)
    }
}

#[async_trait]
impl VacancyRepository for InMemoryStore {
    async fn insert(&self, vacancy: NewVacancy) -> DomainResult<Vacancy> {
        let mut tables = self.tables.write().await;
        tables.require_user(vacancy.employer_id)?;
        let id = VacancyId::new(tables.next_id())?;
        let vacancy = Vacancy {
            id,
            employer_id: vacancy.employer_id,
            details: vacancy.details,
            status: vacancy.status,
            created_at: vacancy.created_at,
            updated_at: vacancy.created_at,
        };
        tables.vacancies.insert(id.0, vacancy.clone());
        Ok(vacancy)
    }

    async fn find_by_id(&self, id: VacancyId) -> DomainResult<Option<Vacancy>> {
        Ok(self.tables.read().await.vacancies.get(&id.0).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Vacancy>> {
        Ok(self.tables.read().await.vacancies.values().cloned().collect())
    }

    async fn list_by_owner(&self, employer_id: UserId) -> DomainResult<Vec<Vacancy>> {
        let tables = self.tables.read().await;
        Ok(owned_by(&tables.vacancies, |v| v.employer_id == employer_id))
    }

    async fn update(&self, vacancy: &Vacancy) -> DomainResult<Vacancy> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .vacancies
            .get_mut(&vacancy.id.0)
            .ok_or_else(|| DomainError::not_found("vacancy not found"))?;
        *stored = vacancy.clone();
        Ok(vacancy.clone())
    }

    async fn delete(&self, id: VacancyId) -> DomainResult<u64> {
        let mut tables = self.tables.write().await;
        if tables.vacancies.remove(&id.0).is_none() {
            return Err(DomainError::not_found("vacancy not found"));
        }
        Ok(tables.remove_applications(|app| app.vacancy_id != id))
    }
}

#[async_trait]
impl ResumeRepository for InMemoryStore {
    async fn insert(&self, resume: NewResume) -> DomainResult<Resume> {
        let mut tables = self.tables.write().await;
        tables.require_user(resume.user_id)?;
        let id = ResumeId::new(tables.next_id())?;
        let resume = Resume {
            id,
            user_id: resume.user_id,
            details: resume.details,
            status: resume.status,
            created_at: resume.created_at,
            updated_at: resume.created_at,
        };
        tables.resumes.insert(id.0, resume.clone());
        Ok(resume)
    }

    async fn find_by_id(&self, id: ResumeId) -> DomainResult<Option<Resume>> {
        Ok(self.tables.read().await.resumes.get(&id.0).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Resume>> {
        Ok(self.tables.read().await.resumes.values().cloned().collect())
    }

    async fn list_by_owner(&self, user_id: UserId) -> DomainResult<Vec<Resume>> {
        let tables = self.tables.read().await;
        Ok(owned_by(&tables.resumes, |r| r.user_id == user_id))
    }

    async fn update(&self, resume: &Resume) -> DomainResult<Resume> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .resumes
            .get_mut(&resume.id.0)
            .ok_or_else(|| DomainError::not_found("resume not found"))?;
        *stored = resume.clone();
        Ok(resume.clone())
    }

    async fn delete(&self, id: ResumeId) -> DomainResult<u64> {
        let mut tables = self.tables.write().await;
        if tables.resumes.remove(&id.0).is_none() {
            return Err(DomainError::not_found("resume not found"));
        }
        Ok(tables.remove_applications(|app| app.resume_id != id))
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryStore {
    async fn insert(&self, application: NewJobApplication) -> DomainResult<JobApplication> {
        let mut tables = self.tables.write().await;
        tables.require_user(application.user_id)?;
        if !tables.vacancies.contains_key(&application.vacancy_id.0) {
            return Err(DomainError::not_found("vacancy not found"));
        }
        if !tables.resumes.contains_key(&application.resume_id.0) {
            return Err(DomainError::not_found("resume not found"));
        }

        let duplicate = tables.applications.values().any(|existing| {
            existing.user_id == application.user_id && existing.vacancy_id == application.vacancy_id
        });
        if duplicate {
            return Err(DomainError::conflict(
                "application for this vacancy already exists",
            ));
        }

        let id = ApplicationId::new(tables.next_id())?;
        let application = JobApplication {
            id,
            user_id: application.user_id,
            vacancy_id: application.vacancy_id,
            resume_id: application.resume_id,
            status: application.status,
            created_at: application.created_at,
            updated_at: application.created_at,
        };
        tables.applications.insert(id.0, application.clone());
        Ok(application)
    }

    async fn find_by_id(&self, id: ApplicationId) -> DomainResult<Option<JobApplication>> {
        Ok(self.tables.read().await.applications.get(&id.0).cloned())
    }

    async fn list_by_owner(&self, user_id: UserId) -> DomainResult<Vec<JobApplication>> {
        let tables = self.tables.read().await;
        Ok(owned_by(&tables.applications, |a| a.user_id == user_id))
    }

    async fn list_by_vacancy(&self, vacancy_id: VacancyId) -> DomainResult<Vec<JobApplication>> {
        let tables = self.tables.read().await;
        Ok(owned_by(&tables.applications, |a| a.vacancy_id == vacancy_id))
    }

    async fn update_status(&self, application: &JobApplication) -> DomainResult<JobApplication> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .applications
            .get_mut(&application.id.0)
            .ok_or_else(|| DomainError::not_found("application not found"))?;
        stored.status = application.status;
        stored.updated_at = application.updated_at;
        Ok(stored.clone())
    }

    async fn delete(&self, id: ApplicationId) -> DomainResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .applications
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("application not found"))
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.tables.read().await.applications.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        resume::{ResumeDetails, ResumeStatus},
        user::{DisplayName, PasswordHash},
        vacancy::{VacancyDetails, VacancyStatus},
    };
    use chrono::Utc;

    async fn user(store: &InMemoryStore, email: &str, role: Role) -> User {
        UserRepository::insert(
            store,
            NewUser::new(
                Email::new(email).unwrap(),
                PasswordHash::new("hash").unwrap(),
                DisplayName::new("Someone").unwrap(),
                role,
                Utc::now(),
            ),
        )
        .await
        .unwrap()
    }

    async fn vacancy(store: &InMemoryStore, owner: UserId) -> Vacancy {
        let details = VacancyDetails {
            title: "Engineer".into(),
            ..VacancyDetails::default()
        };
        let new = NewVacancy::new(owner, details, VacancyStatus::Active, Utc::now()).unwrap();
        VacancyRepository::insert(store, new).await.unwrap()
    }

    async fn resume(store: &InMemoryStore, owner: UserId) -> Resume {
        let details = ResumeDetails {
            title: "CV".into(),
            ..ResumeDetails::default()
        };
        let new = NewResume::new(owner, details, ResumeStatus::Active, Utc::now()).unwrap();
        ResumeRepository::insert(store, new).await.unwrap()
    }

    #[tokio::test]
    async fn email_uniqueness_is_enforced() {
        let store = InMemoryStore::default();
        user(&store, "a@x.com", Role::Jobseeker).await;

        let again = UserRepository::insert(
            &store,
            NewUser::new(
                Email::new("A@X.com").unwrap(),
                PasswordHash::new("hash").unwrap(),
                DisplayName::new("Other").unwrap(),
                Role::Employer,
                Utc::now(),
            ),
        )
        .await;
        assert!(matches!(again, Err(DomainError::Conflict(_))));
    }

    #[tokio::test]
    async fn second_application_for_same_vacancy_conflicts() {
        let store = InMemoryStore::default();
        let employer = user(&store, "e@x.com", Role::Employer).await;
        let seeker = user(&store, "s@x.com", Role::Jobseeker).await;
        let vacancy = vacancy(&store, employer.id).await;
        let first = resume(&store, seeker.id).await;
        let second = resume(&store, seeker.id).await;

        ApplicationRepository::insert(
            &store,
            NewJobApplication::pending(seeker.id, vacancy.id, first.id, Utc::now()),
        )
        .await
        .unwrap();
        let duplicate = ApplicationRepository::insert(
            &store,
            NewJobApplication::pending(seeker.id, vacancy.id, second.id, Utc::now()),
        )
        .await;

        assert!(matches!(duplicate, Err(DomainError::Conflict(_))));
        assert_eq!(ApplicationRepository::count(&store).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn deleting_a_user_removes_everything_they_own() {
        let store = InMemoryStore::default();
        let employer = user(&store, "e@x.com", Role::Employer).await;
        let seeker = user(&store, "s@x.com", Role::Jobseeker).await;
        let other = user(&store, "o@x.com", Role::Jobseeker).await;
        let vacancy = vacancy(&store, employer.id).await;
        let seeker_resume = resume(&store, seeker.id).await;
        let other_resume = resume(&store, other.id).await;

        for (applicant, cv) in [(seeker.id, seeker_resume.id), (other.id, other_resume.id)] {
            ApplicationRepository::insert(
                &store,
                NewJobApplication::pending(applicant, vacancy.id, cv, Utc::now()),
            )
            .await
            .unwrap();
        }

        UserRepository::delete(&store, seeker.id).await.unwrap();
        assert!(ResumeRepository::find_by_id(&store, seeker_resume.id).await.unwrap().is_none());
        assert_eq!(ApplicationRepository::count(&store).await.unwrap(), 1);

        UserRepository::delete(&store, employer.id).await.unwrap();
        assert!(VacancyRepository::find_by_id(&store, vacancy.id).await.unwrap().is_none());
        assert_eq!(ApplicationRepository::count(&store).await.unwrap(), 0);
        assert!(ResumeRepository::find_by_id(&store, other_resume.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn rows_for_a_missing_owner_are_rejected() {
        let store = InMemoryStore::default();
        let employer = user(&store, "e@x.com", Role::Employer).await;
        UserRepository::delete(&store, employer.id).await.unwrap();

        let details = VacancyDetails {
            title: "Engineer".into(),
            ..VacancyDetails::default()
        };
        let orphan =
            NewVacancy::new(employer.id, details, VacancyStatus::Active, Utc::now()).unwrap();
        let vacancy = VacancyRepository::insert(&store, orphan).await;
        assert!(matches!(vacancy, Err(DomainError::NotFound(_))));

        let details = ResumeDetails {
            title: "CV".into(),
            ..ResumeDetails::default()
        };
        let orphan = NewResume::new(employer.id, details, ResumeStatus::Active, Utc::now()).unwrap();
        let resume = ResumeRepository::insert(&store, orphan).await;
        assert!(matches!(resume, Err(DomainError::NotFound(_))));
        assert!(VacancyRepository::list_all(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_a_resume_takes_its_applications_and_blocks_late_ones() {
        let store = InMemoryStore::default();
        let employer = user(&store, "e@x.com", Role::Employer).await;
        let seeker = user(&store, "s@x.com", Role::Jobseeker).await;
        let first = vacancy(&store, employer.id).await;
        let second = vacancy(&store, employer.id).await;
        let cv = resume(&store, seeker.id).await;

        ApplicationRepository::insert(
            &store,
            NewJobApplication::pending(seeker.id, first.id, cv.id, Utc::now()),
        )
        .await
        .unwrap();

        let removed = ResumeRepository::delete(&store, cv.id).await.unwrap();
        assert_eq!(removed, 1);

        let late = ApplicationRepository::insert(
            &store,
            NewJobApplication::pending(seeker.id, second.id, cv.id, Utc::now()),
        )
        .await;
        assert!(matches!(late, Err(DomainError::NotFound(_))));
        assert_eq!(ApplicationRepository::count(&store).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn deleting_a_vacancy_takes_its_applications() {
        let store = InMemoryStore::default();
        let employer = user(&store, "e@x.com", Role::Employer).await;
        let seeker = user(&store, "s@x.com", Role::Jobseeker).await;
        let kept = vacancy(&store, employer.id).await;
        let dropped = vacancy(&store, employer.id).await;
        let cv = resume(&store, seeker.id).await;

        for target in [kept.id, dropped.id] {
            ApplicationRepository::insert(
                &store,
                NewJobApplication::pending(seeker.id, target, cv.id, Utc::now()),
            )
            .await
            .unwrap();
        }

        assert_eq!(VacancyRepository::delete(&store, dropped.id).await.unwrap(), 1);
        let left = ApplicationRepository::list_by_owner(&store, seeker.id).await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].vacancy_id, kept.id);
    }
}
