//! In-memory `DeploymentService` used by scenario tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use appdeploy::{
    ApplicationVersionDescription, ApplicationVersionStatus, CheckDnsAvailabilityRequest,
    CheckDnsAvailabilityResult, CreateApplicationVersionRequest, CreateApplicationVersionResult,
    CreateEnvironmentRequest, CreateEnvironmentResult, DeploymentService,
    DescribeEnvironmentsRequest, DescribeEnvironmentsResult, DescribeEventsRequest,
    DescribeEventsResult, EnvironmentDescription, EnvironmentStatus, EventDescription,
    EventSeverity, ServiceError, ServiceErrorCode, ServiceResult, TerminateEnvironmentRequest,
    TerminateEnvironmentResult, UpdateEnvironmentRequest, UpdateEnvironmentResult,
};

/// Remembers versions and environments, logs one event per call, and
/// answers with what the real service would report.
#[derive(Default)]
pub struct FakeDeploymentService {
    versions: RefCell<BTreeMap<(String, String), ApplicationVersionDescription>>,
    environments: RefCell<Vec<EnvironmentDescription>>,
    events: RefCell<Vec<EventDescription>>,
    /// Maximum number of live environments before TooManyEnvironments
    pub environment_limit: Option<usize>,
}

impl FakeDeploymentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment_limit(mut self, limit: usize) -> Self {
        self.environment_limit = Some(limit);
        self
    }

    fn log(&self, environment: Option<&str>, message: &str) {
        let mut event = EventDescription::new()
            .with_message(message)
            .with_severity(EventSeverity::Info);
        event.set_environment_name(environment.map(str::to_string));
        self.events.borrow_mut().insert(0, event);
    }

    fn invalid(message: &str) -> ServiceError {
        ServiceError::of(ServiceErrorCode::InvalidRequest, message).with_status_code(400)
    }

    fn find_index(&self, id: Option<&str>, name: Option<&str>) -> ServiceResult<usize> {
        self.environments
            .borrow()
            .iter()
            .position(|env| {
                (id.is_some() && env.environment_id() == id)
                    || (name.is_some() && env.environment_name() == name)
            })
            .ok_or_else(|| {
                ServiceError::of(ServiceErrorCode::ResourceNotFound, "No Environment found")
                    .with_status_code(404)
            })
    }
}

impl DeploymentService for FakeDeploymentService {
    fn create_application_version(
        &self,
        request: &CreateApplicationVersionRequest,
    ) -> ServiceResult<CreateApplicationVersionResult> {
        let (Some(app), Some(label)) = (request.application_name(), request.version_label()) else {
            return Err(Self::invalid("ApplicationName and VersionLabel are required"));
        };
        if request.source_bundle().is_some() && request.source_build_information().is_some() {
            return Err(Self::invalid(
                "Specify SourceBundle or SourceBuildInformation, not both",
            ));
        }

        let status = if request.build_configuration().is_some() {
            ApplicationVersionStatus::Building
        } else if request.process() == Some(true) {
            ApplicationVersionStatus::Processing
        } else {
            ApplicationVersionStatus::Unprocessed
        };

        let mut version = ApplicationVersionDescription::new()
            .with_application_name(app)
            .with_version_label(label)
            .with_status(status);
        version.set_description(request.description().map(str::to_string));
        version.set_source_bundle(request.source_bundle().cloned());
        version.set_source_build_information(request.source_build_information().cloned());

        self.versions
            .borrow_mut()
            .insert((app.to_string(), label.to_string()), version.clone());
        self.log(None, &format!("Created application version {label}"));

        Ok(CreateApplicationVersionResult::new().with_application_version(version))
    }

    fn create_environment(
        &self,
        request: &CreateEnvironmentRequest,
    ) -> ServiceResult<CreateEnvironmentResult> {
        let (Some(app), Some(name)) = (request.application_name(), request.environment_name())
        else {
            return Err(Self::invalid("ApplicationName and EnvironmentName are required"));
        };

        let live = self
            .environments
            .borrow()
            .iter()
            .filter(|env| env.status() != Some(EnvironmentStatus::Terminated.as_str()))
            .count();
        if self.environment_limit.is_some_and(|limit| live >= limit) {
            return Err(ServiceError::of(
                ServiceErrorCode::TooManyEnvironments,
                "environment limit reached",
            )
            .with_status_code(400));
        }

        let id = format!("e-{:06}", self.environments.borrow().len() + 1);
        let mut env = EnvironmentDescription::new()
            .with_application_name(app)
            .with_environment_name(name)
            .with_environment_id(id)
            .with_status(EnvironmentStatus::Launching)
            .with_abortable_operation_in_progress(false);
        env.set_version_label(request.version_label().map(str::to_string));
        env.set_tier(request.tier().cloned());
        env.set_description(request.description().map(str::to_string));
        if let Some(prefix) = request.cname_prefix() {
            env.set_cname(Some(format!("{prefix}.us-east-1.example.com")));
        }

        self.environments.borrow_mut().push(env.clone());
        self.log(Some(name), "createEnvironment is starting.");
        Ok(env)
    }

    fn update_environment(
        &self,
        request: &UpdateEnvironmentRequest,
    ) -> ServiceResult<UpdateEnvironmentResult> {
        let index = self.find_index(request.environment_id(), request.environment_name())?;
        let mut environments = self.environments.borrow_mut();
        let env = &mut environments[index];

        if env.status() == Some(EnvironmentStatus::Updating.as_str()) {
            return Err(ServiceError::of(
                ServiceErrorCode::OperationInProgress,
                "Environment is already updating",
            )
            .with_status_code(400));
        }
        if let Some(label) = request.version_label() {
            env.set_version_label(Some(label.to_string()));
        }
        env.set_status(Some(EnvironmentStatus::Updating.to_string()));
        env.set_abortable_operation_in_progress(Some(true));

        let updated = env.clone();
        drop(environments);
        self.log(updated.environment_name(), "Environment update is starting.");
        Ok(updated)
    }

    fn terminate_environment(
        &self,
        request: &TerminateEnvironmentRequest,
    ) -> ServiceResult<TerminateEnvironmentResult> {
        let index = self.find_index(request.environment_id(), request.environment_name())?;
        let mut environments = self.environments.borrow_mut();
        let env = &mut environments[index];
        env.set_status(Some(EnvironmentStatus::Terminating.to_string()));
        env.set_abortable_operation_in_progress(Some(false));

        let terminated = env.clone();
        drop(environments);
        self.log(terminated.environment_name(), "terminateEnvironment is starting.");
        Ok(terminated)
    }

    fn describe_environments(
        &self,
        request: &DescribeEnvironmentsRequest,
    ) -> ServiceResult<DescribeEnvironmentsResult> {
        let environments: Vec<EnvironmentDescription> = self
            .environments
            .borrow()
            .iter()
            .filter(|env| {
                request.application_name().is_none()
                    || env.application_name() == request.application_name()
            })
            .filter(|env| match request.environment_ids() {
                Some(ids) => ids.iter().any(|id| env.environment_id() == Some(id.as_str())),
                None => true,
            })
            .filter(|env| match request.environment_names() {
                Some(names) => names
                    .iter()
                    .any(|name| env.environment_name() == Some(name.as_str())),
                None => true,
            })
            .cloned()
            .collect();
        Ok(DescribeEnvironmentsResult::new().with_environments(&environments))
    }

    fn describe_events(
        &self,
        request: &DescribeEventsRequest,
    ) -> ServiceResult<DescribeEventsResult> {
        let limit = request
            .max_records()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(usize::MAX);
        let events: Vec<EventDescription> = self
            .events
            .borrow()
            .iter()
            .filter(|event| {
                request.environment_name().is_none()
                    || event.environment_name() == request.environment_name()
            })
            .take(limit)
            .cloned()
            .collect();
        Ok(DescribeEventsResult::new().with_events(&events))
    }

    fn check_dns_availability(
        &self,
        request: &CheckDnsAvailabilityRequest,
    ) -> ServiceResult<CheckDnsAvailabilityResult> {
        let Some(prefix) = request.cname_prefix() else {
            return Err(Self::invalid("CNAMEPrefix is required"));
        };
        let cname = format!("{prefix}.us-east-1.example.com");
        let taken = self
            .environments
            .borrow()
            .iter()
            .any(|env| env.cname() == Some(cname.as_str()));

        let result = CheckDnsAvailabilityResult::new().with_available(!taken);
        Ok(if taken {
            result
        } else {
            result.with_fully_qualified_cname(cname)
        })
    }
}
