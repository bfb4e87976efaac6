use log::debug;
use serde_json::Value;

use crate::client::{unwrap_list, unwrap_one, AdeskClient};
use crate::errors::AdeskError;
use crate::models::{Project, ProjectCategory};
use crate::params::{require_text, Params};

/// Filters for [`Projects::list`].
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub category: Option<i64>,
    pub managers: Option<Vec<i64>>,
    /// `active`, `archived` or `all`.
    pub status: Option<String>,
    pub start: Option<i64>,
    pub length: Option<i64>,
    pub q: Option<String>,
    pub reduced: Option<bool>,
    pub sorting: Option<String>,
}

impl ProjectFilter {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push_opt("category", self.category)
            .push_opt_list("managers[]", self.managers.as_deref())
            .push_opt("status", self.status.as_deref())
            .push_opt("start", self.start)
            .push_opt("length", self.length)
            .push_opt("q", self.q.as_deref())
            .push_opt("reduced", self.reduced)
            .push_opt("sorting", self.sorting.as_deref());
        params
    }
}

/// Arguments for [`Projects::create`].
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub is_archived: Option<bool>,
    pub plan_income: Option<f64>,
    pub plan_outcome: Option<f64>,
    pub category: Option<i64>,
    pub manager: Option<i64>,
    pub deal_contractor: Option<i64>,
    pub deal_legal_entity: Option<i64>,
    pub is_deal: Option<bool>,
}

impl NewProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    fn to_params(&self) -> Result<Params, AdeskError> {
        require_text("name", &self.name)?;
        let mut data = Params::new();
        data.push("name", self.name.as_str());
        push_project_fields(
            &mut data,
            ProjectFields {
                description: self.description.as_deref(),
                is_archived: self.is_archived,
                plan_income: self.plan_income,
                plan_outcome: self.plan_outcome,
                category: self.category,
                manager: self.manager,
                deal_contractor: self.deal_contractor,
                deal_legal_entity: self.deal_legal_entity,
                is_deal: self.is_deal,
            },
        );
        Ok(data)
    }
}

/// Partial update for [`Projects::update`]; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_archived: Option<bool>,
    pub plan_income: Option<f64>,
    pub plan_outcome: Option<f64>,
    pub category: Option<i64>,
    pub manager: Option<i64>,
    pub deal_contractor: Option<i64>,
    pub deal_legal_entity: Option<i64>,
    pub is_deal: Option<bool>,
}

impl ProjectUpdate {
    fn to_params(&self) -> Params {
        let mut data = Params::new();
        data.push_opt("name", self.name.as_deref());
        push_project_fields(
            &mut data,
            ProjectFields {
                description: self.description.as_deref(),
                is_archived: self.is_archived,
                plan_income: self.plan_income,
                plan_outcome: self.plan_outcome,
                category: self.category,
                manager: self.manager,
                deal_contractor: self.deal_contractor,
                deal_legal_entity: self.deal_legal_entity,
                is_deal: self.is_deal,
            },
        );
        data
    }
}

struct ProjectFields<'a> {
    description: Option<&'a str>,
    is_archived: Option<bool>,
    plan_income: Option<f64>,
    plan_outcome: Option<f64>,
    category: Option<i64>,
    manager: Option<i64>,
    deal_contractor: Option<i64>,
    deal_legal_entity: Option<i64>,
    is_deal: Option<bool>,
}

fn push_project_fields(data: &mut Params, fields: ProjectFields<'_>) {
    data.push_opt("description", fields.description)
        .push_opt("is_archived", fields.is_archived)
        .push_opt("plan_income", fields.plan_income)
        .push_opt("plan_outcome", fields.plan_outcome)
        .push_opt("category", fields.category)
        .push_opt("manager", fields.manager)
        .push_opt("deal_contractor", fields.deal_contractor)
        .push_opt("deal_legal_entity", fields.deal_legal_entity)
        .push_opt("is_deal", fields.is_deal);
}

/// Projects and deals.
#[derive(Debug, Clone, Copy)]
pub struct Projects<'a> {
    client: &'a AdeskClient,
}

impl<'a> Projects<'a> {
    pub(crate) fn new(client: &'a AdeskClient) -> Self {
        Self { client }
    }

    /// GET projects
    pub fn list(&self, filter: &ProjectFilter) -> Result<Vec<Project>, AdeskError> {
        debug!("projects.list");
        let response = self.client.get("projects", filter.to_params())?;
        Ok(unwrap_list(response, "projects"))
    }

    /// POST project
    pub fn create(&self, project: &NewProject) -> Result<Option<Project>, AdeskError> {
        let data = project.to_params()?;
        debug!("projects.create fields={}", data.len());
        let response = self.client.post("project", data, Params::new())?;
        Ok(unwrap_one(response, "project"))
    }

    /// POST project/{id}
    pub fn update(
        &self,
        project_id: i64,
        update: &ProjectUpdate,
    ) -> Result<Option<Project>, AdeskError> {
        debug!("projects.update project_id={}", project_id);
        let response = self.client.post(
            &format!("project/{project_id}"),
            update.to_params(),
            Params::new(),
        )?;
        Ok(unwrap_one(response, "project"))
    }

    /// POST project/{id}/remove
    pub fn delete(&self, project_id: i64) -> Result<Option<Value>, AdeskError> {
        debug!("projects.delete project_id={}", project_id);
        self.client.post(
            &format!("project/{project_id}/remove"),
            Params::new(),
            Params::new(),
        )
    }

    /// GET projects/categories
    pub fn list_categories(&self) -> Result<Vec<ProjectCategory>, AdeskError> {
        debug!("projects.list_categories");
        let response = self.client.get("projects/categories", Params::new())?;
        Ok(unwrap_list(response, "categories"))
    }
}
