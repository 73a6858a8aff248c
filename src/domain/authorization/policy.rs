// src/domain/authorization/policy.rs
use crate::domain::authorization::{
    decision::{Decision, Denial, Resource},
    principal::Principal,
};
use crate::domain::job_application::JobApplication;
use crate::domain::resume::Resume;
use crate::domain::user::{Role, UserId};
use crate::domain::vacancy::Vacancy;

/// A protected operation together with the entity snapshots it touches.
///
/// Snapshots are fetched by the caller right before the decision and are never
/// reused across requests.
#[derive(Debug, Clone, Copy)]
pub enum Action<'a> {
    CreateVacancy,
    UpdateVacancy(&'a Vacancy),
    DeleteVacancy(&'a Vacancy),
    CreateResume,
    UpdateResume(&'a Resume),
    DeleteResume(&'a Resume),
    CreateApplication {
        vacancy: Option<&'a Vacancy>,
        resume: Option<&'a Resume>,
        /// Applications the principal already holds.
        existing: &'a [JobApplication],
    },
    UpdateApplicationStatus {
        application: &'a JobApplication,
        vacancy: Option<&'a Vacancy>,
    },
    ViewApplication {
        application: &'a JobApplication,
        vacancy: Option<&'a Vacancy>,
    },
    DeleteApplication(&'a JobApplication),
    /// Scoped read of everything a given user owns (resumes, applications).
    ListOwnedBy(UserId),
    ListVacancyApplications(&'a Vacancy),
    /// Read or edit a single user account.
    ManageUser(UserId),
    /// Account administration: listing, deleting users, platform statistics.
    AdministerUsers,
}

impl Action<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Action::CreateVacancy => "create_vacancy",
            Action::UpdateVacancy(_) => "update_vacancy",
            Action::DeleteVacancy(_) => "delete_vacancy",
            Action::CreateResume => "create_resume",
            Action::UpdateResume(_) => "update_resume",
            Action::DeleteResume(_) => "delete_resume",
            Action::CreateApplication { .. } => "create_application",
            Action::UpdateApplicationStatus { .. } => "update_application_status",
            Action::ViewApplication { .. } => "view_application",
            Action::DeleteApplication(_) => "delete_application",
            Action::ListOwnedBy(_) => "list_owned",
            Action::ListVacancyApplications(_) => "list_vacancy_applications",
            Action::ManageUser(_) => "manage_user",
            Action::AdministerUsers => "administer_users",
        }
    }
}

/// Decide whether `principal` may perform `action`. Pure: no I/O, no caching.
pub fn authorize(principal: &Principal, action: &Action<'_>) -> Decision {
    match *action {
        Action::CreateVacancy => match principal.role {
            Role::Employer => Decision::Allow,
            Role::Jobseeker | Role::Admin => {
                Decision::forbidden("only employers can create vacancies")
            }
        },
        Action::UpdateVacancy(vacancy) | Action::DeleteVacancy(vacancy) => owner_or_admin(
            principal,
            vacancy.employer_id,
            "vacancy belongs to another employer",
        ),
        Action::CreateResume => match principal.role {
            Role::Jobseeker | Role::Admin => Decision::Allow,
            Role::Employer => Decision::forbidden("only jobseekers can create resumes"),
        },
        Action::UpdateResume(resume) | Action::DeleteResume(resume) => owner_or_admin(
            principal,
            resume.user_id,
            "resume belongs to another user",
        ),
        Action::CreateApplication {
            vacancy,
            resume,
            existing,
        } => create_application(principal, vacancy, resume, existing),
        Action::UpdateApplicationStatus {
            application,
            vacancy,
        } => update_application_status(principal, application, vacancy),
        Action::ViewApplication {
            application,
            vacancy,
        } => {
            let owns_vacancy = vacancy.is_some_and(|v| v.is_owned_by(principal.id));
            if principal.is_admin() || application.user_id == principal.id || owns_vacancy {
                Decision::Allow
            } else {
                Decision::forbidden("application belongs to another user")
            }
        }
        Action::DeleteApplication(application) => owner_or_admin(
            principal,
            application.user_id,
            "application belongs to another user",
        ),
        Action::ListOwnedBy(owner) => {
            owner_or_admin(principal, owner, "cannot read another user's records")
        }
        Action::ListVacancyApplications(vacancy) => owner_or_admin(
            principal,
            vacancy.employer_id,
            "vacancy belongs to another employer",
        ),
        Action::ManageUser(user_id) => {
            owner_or_admin(principal, user_id, "cannot manage another user's account")
        }
        Action::AdministerUsers => match principal.role {
            Role::Admin => Decision::Allow,
            Role::Jobseeker | Role::Employer => {
                Decision::forbidden("administrative privileges are required")
            }
        },
    }
}

fn owner_or_admin(principal: &Principal, owner: UserId, reason: &'static str) -> Decision {
    if principal.id == owner || principal.is_admin() {
        Decision::Allow
    } else {
        Decision::forbidden(reason)
    }
}

fn create_application(
    principal: &Principal,
    vacancy: Option<&Vacancy>,
    resume: Option<&Resume>,
    existing: &[JobApplication],
) -> Decision {
    let Some(vacancy) = vacancy else {
        return Decision::not_found(Resource::Vacancy);
    };
    let Some(resume) = resume else {
        return Decision::not_found(Resource::Resume);
    };
    if !resume.is_owned_by(principal.id) {
        return Decision::Deny(Denial::ForeignResume);
    }
    // Keyed on (user, vacancy): a different resume does not make it a new application.
    if existing
        .iter()
        .any(|app| app.user_id == principal.id && app.vacancy_id == vacancy.id)
    {
        return Decision::Deny(Denial::DuplicateApplication);
    }
    Decision::Allow
}

fn update_application_status(
    principal: &Principal,
    application: &JobApplication,
    vacancy: Option<&Vacancy>,
) -> Decision {
    match principal.role {
        Role::Employer => match vacancy {
            Some(vacancy) if vacancy.is_owned_by(principal.id) => Decision::Allow,
            Some(_) => Decision::forbidden("not the owner of the vacancy"),
            None => Decision::not_found(Resource::Vacancy),
        },
        Role::Jobseeker if application.user_id == principal.id => Decision::Allow,
        Role::Jobseeker => Decision::forbidden("not the owner of the application"),
        Role::Admin => Decision::forbidden(
            "status changes are reserved to the applicant and the vacancy owner",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job_application::{ApplicationId, ApplicationStatus};
    use crate::domain::resume::{ResumeDetails, ResumeId, ResumeStatus};
    use crate::domain::vacancy::{VacancyDetails, VacancyId, VacancyStatus};
    use chrono::Utc;

    fn principal(id: i64, role: Role) -> Principal {
        Principal::new(UserId::new(id).unwrap(), role)
    }

    fn vacancy(id: i64, employer: i64) -> Vacancy {
        let now = Utc::now();
        Vacancy {
            id: VacancyId::new(id).unwrap(),
            employer_id: UserId::new(employer).unwrap(),
            details: VacancyDetails {
                title: "Engineer".into(),
                ..VacancyDetails::default()
            },
            status: VacancyStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    fn resume(id: i64, owner: i64) -> Resume {
        let now = Utc::now();
        Resume {
            id: ResumeId::new(id).unwrap(),
            user_id: UserId::new(owner).unwrap(),
            details: ResumeDetails {
                title: "CV".into(),
                ..ResumeDetails::default()
            },
            status: ResumeStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    fn application(id: i64, user: i64, vacancy: i64, resume: i64) -> JobApplication {
        let now = Utc::now();
        JobApplication {
            id: ApplicationId::new(id).unwrap(),
            user_id: UserId::new(user).unwrap(),
            vacancy_id: VacancyId::new(vacancy).unwrap(),
            resume_id: ResumeId::new(resume).unwrap(),
            status: ApplicationStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn only_employers_create_vacancies() {
        assert!(authorize(&principal(1, Role::Employer), &Action::CreateVacancy).is_allowed());
        for role in [Role::Jobseeker, Role::Admin] {
            assert!(matches!(
                authorize(&principal(1, role), &Action::CreateVacancy),
                Decision::Deny(Denial::Forbidden(_))
            ));
        }
    }

    #[test]
    fn vacancy_mutation_requires_owner_or_admin() {
        let v = vacancy(1, 10);
        let owner = principal(10, Role::Employer);
        let other = principal(11, Role::Employer);
        let admin = principal(99, Role::Admin);

        assert!(authorize(&owner, &Action::UpdateVacancy(&v)).is_allowed());
        assert!(authorize(&owner, &Action::DeleteVacancy(&v)).is_allowed());
        assert!(authorize(&admin, &Action::DeleteVacancy(&v)).is_allowed());
        assert_eq!(
            authorize(&other, &Action::UpdateVacancy(&v)),
            Decision::forbidden("vacancy belongs to another employer")
        );
    }

    #[test]
    fn resume_rules() {
        let r = resume(5, 20);
        assert!(authorize(&principal(20, Role::Jobseeker), &Action::CreateResume).is_allowed());
        assert!(!authorize(&principal(21, Role::Employer), &Action::CreateResume).is_allowed());
        assert!(authorize(&principal(20, Role::Jobseeker), &Action::UpdateResume(&r)).is_allowed());
        assert!(!authorize(&principal(21, Role::Jobseeker), &Action::DeleteResume(&r)).is_allowed());
        assert!(authorize(&principal(1, Role::Admin), &Action::DeleteResume(&r)).is_allowed());
    }

    #[test]
    fn create_application_checks_in_order() {
        let applicant = principal(20, Role::Jobseeker);
        let v = vacancy(1, 10);
        let own = resume(5, 20);
        let foreign = resume(6, 21);

        let decide = |vacancy, resume, existing: &[JobApplication]| {
            authorize(
                &applicant,
                &Action::CreateApplication {
                    vacancy,
                    resume,
                    existing,
                },
            )
        };

        assert_eq!(
            decide(None, None, &[]),
            Decision::Deny(Denial::NotFound(Resource::Vacancy))
        );
        assert_eq!(
            decide(Some(&v), None, &[]),
            Decision::Deny(Denial::NotFound(Resource::Resume))
        );
        assert_eq!(
            decide(Some(&v), Some(&foreign), &[]),
            Decision::Deny(Denial::ForeignResume)
        );
        assert_eq!(decide(Some(&v), Some(&own), &[]), Decision::Allow);
    }

    #[test]
    fn duplicate_is_keyed_on_user_and_vacancy_not_resume() {
        let applicant = principal(20, Role::Jobseeker);
        let v = vacancy(1, 10);
        let other_resume = resume(7, 20);
        let existing = [application(1, 20, 1, 5)];

        let decision = authorize(
            &applicant,
            &Action::CreateApplication {
                vacancy: Some(&v),
                resume: Some(&other_resume),
                existing: &existing,
            },
        );
        assert_eq!(decision, Decision::Deny(Denial::DuplicateApplication));

        let other_vacancy = vacancy(2, 10);
        let decision = authorize(
            &applicant,
            &Action::CreateApplication {
                vacancy: Some(&other_vacancy),
                resume: Some(&other_resume),
                existing: &existing,
            },
        );
        assert!(decision.is_allowed());
    }

    #[test]
    fn status_update_rules() {
        let v = vacancy(1, 10);
        let app = application(3, 20, 1, 5);
        let decide = |p: Principal| {
            authorize(
                &p,
                &Action::UpdateApplicationStatus {
                    application: &app,
                    vacancy: Some(&v),
                },
            )
        };

        assert!(decide(principal(10, Role::Employer)).is_allowed());
        assert!(decide(principal(20, Role::Jobseeker)).is_allowed());
        assert!(!decide(principal(11, Role::Employer)).is_allowed());
        assert!(!decide(principal(21, Role::Jobseeker)).is_allowed());
        assert!(!decide(principal(99, Role::Admin)).is_allowed());

        let missing_vacancy = authorize(
            &principal(10, Role::Employer),
            &Action::UpdateApplicationStatus {
                application: &app,
                vacancy: None,
            },
        );
        assert_eq!(missing_vacancy, Decision::not_found(Resource::Vacancy));
    }

    #[test]
    fn view_application_allows_both_parties_and_admin() {
        let v = vacancy(1, 10);
        let app = application(3, 20, 1, 5);
        let decide = |p: Principal| {
            authorize(
                &p,
                &Action::ViewApplication {
                    application: &app,
                    vacancy: Some(&v),
                },
            )
        };

        assert!(decide(principal(10, Role::Employer)).is_allowed());
        assert!(decide(principal(20, Role::Jobseeker)).is_allowed());
        assert!(decide(principal(1, Role::Admin)).is_allowed());
        assert!(!decide(principal(11, Role::Employer)).is_allowed());
    }

    #[test]
    fn scoped_reads_and_administration() {
        let user = UserId::new(20).unwrap();
        assert!(authorize(&principal(20, Role::Jobseeker), &Action::ListOwnedBy(user)).is_allowed());
        assert!(!authorize(&principal(21, Role::Jobseeker), &Action::ListOwnedBy(user)).is_allowed());
        assert!(authorize(&principal(20, Role::Jobseeker), &Action::ManageUser(user)).is_allowed());
        assert!(authorize(&principal(1, Role::Admin), &Action::ManageUser(user)).is_allowed());
        assert!(authorize(&principal(1, Role::Admin), &Action::AdministerUsers).is_allowed());
        assert!(!authorize(&principal(10, Role::Employer), &Action::AdministerUsers).is_allowed());
    }
}
