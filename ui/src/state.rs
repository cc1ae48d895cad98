use payloads::{
    CompanyId, EmployeeId, ExpenseReportId, ProjectId, responses,
};
use std::collections::HashMap;
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(responses::UserProfile),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Authentication (managed by use_authentication) ===
    pub auth_state: AuthState,

    // === Companies (canonical store - managed by use_companies + use_company) ===
    pub individual_companies: HashMap<CompanyId, responses::Company>,
    pub company_index: Option<Vec<CompanyId>>,

    // === Projects (canonical store + per-company index) ===
    pub individual_projects: HashMap<ProjectId, responses::Project>,
    pub project_index: Option<Vec<ProjectId>>,
    pub projects_by_company: HashMap<CompanyId, Vec<ProjectId>>,

    // === Employees ===
    pub individual_employees: HashMap<EmployeeId, responses::Employee>,
    pub employee_index: Option<Vec<EmployeeId>>,

    // === Expense reports ===
    pub individual_reports: HashMap<ExpenseReportId, responses::ExpenseReport>,
    pub report_index: Option<Vec<ExpenseReportId>>,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn profile(&self) -> Option<&responses::UserProfile> {
        match &self.auth_state {
            AuthState::LoggedIn(profile) => Some(profile),
            _ => None,
        }
    }

    /// Drop everything tied to the session. Entity caches go too, since a
    /// different login may not be allowed to see them.
    pub fn logout(&mut self) {
        *self = State {
            auth_state: AuthState::LoggedOut,
            ..State::default()
        };
    }

    // Companies

    pub fn has_companies_loaded(&self) -> bool {
        self.company_index.is_some()
    }

    /// All companies in index order, if the list has been fetched.
    pub fn companies(&self) -> Option<Vec<responses::Company>> {
        self.company_index.as_ref().map(|ids| {
            ids.iter()
                .filter_map(|id| self.individual_companies.get(id))
                .cloned()
                .collect()
        })
    }

    pub fn set_companies(&mut self, companies: Vec<responses::Company>) {
        let ids: Vec<CompanyId> =
            companies.iter().map(|c| c.company_id).collect();
        for company in companies {
            self.individual_companies.insert(company.company_id, company);
        }
        self.company_index = Some(ids);
    }

    pub fn has_company_loaded(&self, company_id: CompanyId) -> bool {
        self.individual_companies.contains_key(&company_id)
    }

    pub fn get_company(
        &self,
        company_id: CompanyId,
    ) -> Option<&responses::Company> {
        self.individual_companies.get(&company_id)
    }

    /// Insert or replace one company, keeping the fetched index coherent.
    pub fn upsert_company(&mut self, company: responses::Company) {
        let id = company.company_id;
        self.individual_companies.insert(id, company);
        if let Some(index) = &mut self.company_index
            && !index.contains(&id)
        {
            index.push(id);
        }
    }

    pub fn remove_company(&mut self, company_id: CompanyId) {
        self.individual_companies.remove(&company_id);
        if let Some(index) = &mut self.company_index {
            index.retain(|id| *id != company_id);
        }
        // Projects under the company are gone server-side as well.
        if let Some(project_ids) = self.projects_by_company.remove(&company_id)
        {
            for project_id in &project_ids {
                self.individual_projects.remove(project_id);
            }
            if let Some(index) = &mut self.project_index {
                index.retain(|id| !project_ids.contains(id));
            }
        }
    }

    // Projects

    pub fn has_projects_loaded(&self) -> bool {
        self.project_index.is_some()
    }

    pub fn projects(&self) -> Option<Vec<responses::Project>> {
        self.project_index.as_ref().map(|ids| {
            ids.iter()
                .filter_map(|id| self.individual_projects.get(id))
                .cloned()
                .collect()
        })
    }

    pub fn set_projects(&mut self, projects: Vec<responses::Project>) {
        let ids: Vec<ProjectId> =
            projects.iter().map(|p| p.project_id).collect();
        for project in projects {
            self.individual_projects.insert(project.project_id, project);
        }
        self.project_index = Some(ids);
    }

    pub fn has_projects_loaded_for_company(
        &self,
        company_id: CompanyId,
    ) -> bool {
        self.projects_by_company.contains_key(&company_id)
    }

    pub fn projects_for_company(
        &self,
        company_id: CompanyId,
    ) -> Option<Vec<responses::Project>> {
        self.projects_by_company.get(&company_id).map(|ids| {
            ids.iter()
                .filter_map(|id| self.individual_projects.get(id))
                .cloned()
                .collect()
        })
    }

    pub fn set_projects_for_company(
        &mut self,
        company_id: CompanyId,
        projects: Vec<responses::Project>,
    ) {
        let ids: Vec<ProjectId> =
            projects.iter().map(|p| p.project_id).collect();
        for project in projects {
            self.individual_projects.insert(project.project_id, project);
        }
        self.projects_by_company.insert(company_id, ids);
    }

    pub fn has_project_loaded(&self, project_id: ProjectId) -> bool {
        self.individual_projects.contains_key(&project_id)
    }

    pub fn get_project(
        &self,
        project_id: ProjectId,
    ) -> Option<&responses::Project> {
        self.individual_projects.get(&project_id)
    }

    pub fn upsert_project(&mut self, project: responses::Project) {
        let id = project.project_id;
        let company_id = project.project_details.company_id;
        self.individual_projects.insert(id, project);
        if let Some(index) = &mut self.project_index
            && !index.contains(&id)
        {
            index.push(id);
        }
        if let Some(ids) = self.projects_by_company.get_mut(&company_id)
            && !ids.contains(&id)
        {
            ids.push(id);
        }
    }

    pub fn remove_project(&mut self, project_id: ProjectId) {
        self.individual_projects.remove(&project_id);
        if let Some(index) = &mut self.project_index {
            index.retain(|id| *id != project_id);
        }
        for ids in self.projects_by_company.values_mut() {
            ids.retain(|id| *id != project_id);
        }
    }

    // Employees

    pub fn has_employees_loaded(&self) -> bool {
        self.employee_index.is_some()
    }

    pub fn employees(&self) -> Option<Vec<responses::Employee>> {
        self.employee_index.as_ref().map(|ids| {
            ids.iter()
                .filter_map(|id| self.individual_employees.get(id))
                .cloned()
                .collect()
        })
    }

    pub fn set_employees(&mut self, employees: Vec<responses::Employee>) {
        let ids: Vec<EmployeeId> =
            employees.iter().map(|e| e.employee_id).collect();
        for employee in employees {
            self.individual_employees.insert(employee.employee_id, employee);
        }
        self.employee_index = Some(ids);
    }

    pub fn get_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Option<&responses::Employee> {
        self.individual_employees.get(&employee_id)
    }

    /// Display name for an assignee, when the employee list is loaded.
    pub fn employee_name(&self, employee_id: EmployeeId) -> Option<&str> {
        self.get_employee(employee_id)
            .map(|e| e.employee_details.name.as_str())
    }

    pub fn upsert_employee(&mut self, employee: responses::Employee) {
        let id = employee.employee_id;
        self.individual_employees.insert(id, employee);
        if let Some(index) = &mut self.employee_index
            && !index.contains(&id)
        {
            index.push(id);
        }
    }

    pub fn remove_employee(&mut self, employee_id: EmployeeId) {
        self.individual_employees.remove(&employee_id);
        if let Some(index) = &mut self.employee_index {
            index.retain(|id| *id != employee_id);
        }
    }

    // Expense reports

    pub fn has_reports_loaded(&self) -> bool {
        self.report_index.is_some()
    }

    pub fn reports(&self) -> Option<Vec<responses::ExpenseReport>> {
        self.report_index.as_ref().map(|ids| {
            ids.iter()
                .filter_map(|id| self.individual_reports.get(id))
                .cloned()
                .collect()
        })
    }

    pub fn set_reports(&mut self, reports: Vec<responses::ExpenseReport>) {
        let ids: Vec<ExpenseReportId> =
            reports.iter().map(|r| r.report_id).collect();
        for report in reports {
            self.individual_reports.insert(report.report_id, report);
        }
        self.report_index = Some(ids);
    }

    pub fn has_report_loaded(&self, report_id: ExpenseReportId) -> bool {
        self.individual_reports.contains_key(&report_id)
    }

    pub fn get_report(
        &self,
        report_id: ExpenseReportId,
    ) -> Option<&responses::ExpenseReport> {
        self.individual_reports.get(&report_id)
    }

    pub fn upsert_report(&mut self, report: responses::ExpenseReport) {
        let id = report.report_id;
        self.individual_reports.insert(id, report);
        if let Some(index) = &mut self.report_index
            && !index.contains(&id)
        {
            index.push(id);
        }
    }

    pub fn remove_report(&mut self, report_id: ExpenseReportId) {
        self.individual_reports.remove(&report_id);
        if let Some(index) = &mut self.report_index {
            index.retain(|id| *id != report_id);
        }
    }
}
