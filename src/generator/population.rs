//! Leaf and near-leaf collections: departments, members, workflow templates,
//! categories and materials.

use chrono::Duration;
use rand::Rng;
use tracing::debug;

use super::codes::{generate_id, sequence_code};
use super::fields::{self, DAY_MS};
use super::Generator;
use crate::models::{
    Category, CategoryCode, Dataset, Department, DepartmentCode, Material, MaterialId, Member,
    MemberId, Role, Workflow, WorkflowId,
};

impl<R: Rng> Generator<R> {
    pub(super) fn populate_departments(&mut self, data: &mut Dataset) {
        let wanted = self.config.num_departments as usize;
        let pool = self.catalog.departments;
        for &(code, name) in pool.iter().take(wanted) {
            let created_at = self.millis_ago(30 * DAY_MS);
            data.departments.insert(
                DepartmentCode::from(code),
                Department {
                    code: DepartmentCode::from(code),
                    name: name.to_string(),
                    created_at,
                },
            );
        }
        debug!(count = data.departments.len(), "departments populated");
    }

    /// Sales, admin and development staff first, then workers spread over the
    /// departments in order, `num_workers_per_dept` each.
    pub(super) fn populate_members(&mut self, data: &mut Dataset) {
        let staff = [
            ("SALES", Role::Sales, self.config.num_sales_members),
            ("ADMIN", Role::Admin, self.config.num_admin_members),
            ("DEV", Role::Development, self.config.num_dev_members),
        ];
        for (prefix, role, count) in staff {
            for i in 0..count as usize {
                let member = self.new_member(MemberId::from(generate_id(prefix, i)), role, Vec::new());
                data.members.insert(member.id.clone(), member);
            }
        }

        let departments: Vec<DepartmentCode> = data.departments.keys().cloned().collect();
        let mut worker_index = 0;
        for department in departments {
            for _ in 0..self.config.num_workers_per_dept {
                let id = MemberId::from(generate_id("WORKER", worker_index));
                let member = self.new_member(id, Role::Worker, vec![department.clone()]);
                data.members.insert(member.id.clone(), member);
                worker_index += 1;
            }
        }
        debug!(
            count = data.members.len(),
            workers = worker_index,
            "members populated"
        );
    }

    fn new_member(&mut self, id: MemberId, role: Role, departments: Vec<DepartmentCode>) -> Member {
        let name = fields::full_name(&mut self.rng, &self.catalog);
        Member {
            code: id.clone(),
            id,
            phone: fields::phone_number(&mut self.rng),
            email: fields::email_for(&mut self.rng, &name),
            name,
            role,
            departments,
            date_of_birth: fields::date_of_birth(&mut self.rng),
            is_active: true,
            created_at: self.millis_ago(30 * DAY_MS),
        }
    }

    /// One template per (department, workflow name) pair of the generated departments.
    pub(super) fn populate_workflows(&mut self, data: &mut Dataset) {
        let mut index = 0;
        for code in data.departments.keys() {
            for name in self.catalog.workflows_for(code.as_str()) {
                data.workflows.insert(
                    WorkflowId::from(generate_id("WF", index)),
                    Workflow {
                        name: name.to_string(),
                        department: code.clone(),
                    },
                );
                index += 1;
            }
        }
        debug!(count = data.workflows.len(), "workflow templates populated");
    }

    pub(super) fn populate_categories(&mut self, data: &mut Dataset) {
        let wanted = self.config.num_categories as usize;
        let colors = self.catalog.category_colors;
        let pool = self.catalog.category_names;
        for (i, &name) in pool.iter().take(wanted).enumerate() {
            let code = CategoryCode::from(generate_id("CAT", i));
            let category = Category {
                code: code.clone(),
                name: name.to_string(),
                description: format!("Danh mục {}", name),
                color: colors
                    .get(i % colors.len().max(1))
                    .copied()
                    .unwrap_or_default()
                    .to_string(),
                created_at: self.millis_ago(30 * DAY_MS),
                updated_at: self.millis_ago(30 * DAY_MS),
            };
            data.categories.insert(code, category);
        }
        debug!(count = data.categories.len(), "categories populated");
    }

    /// Known material names take their category and unit from the catalog
    /// profile table; anything else gets a uniformly random category and unit.
    pub(super) fn populate_materials(&mut self, data: &mut Dataset) {
        let wanted = self.config.num_materials as usize;
        let pool = self.catalog.material_names;
        for (i, &name) in pool.iter().take(wanted).enumerate() {
            let id = MaterialId::from(sequence_code("MAT", i));
            let (category, unit) = match self.catalog.material_profile(name) {
                Some(profile) => profile,
                None => (
                    fields::pick(&mut self.rng, self.catalog.category_names),
                    fields::pick(&mut self.rng, self.catalog.units),
                ),
            };

            let stock_quantity = self.rng.gen_range(100..1000);
            let min_threshold = self.rng.gen_range(50..150);
            let max_capacity = stock_quantity + 500 + self.rng.gen_range(0..1000);
            let import_price = self.rng.gen_range(10_000..110_000);
            let last_updated = (self.now - Duration::days(self.rng.gen_range(0..30)))
                .format("%Y-%m-%d")
                .to_string();

            let material = Material {
                id: id.clone(),
                name: name.to_string(),
                category: category.to_string(),
                stock_quantity,
                unit: unit.to_string(),
                min_threshold,
                max_capacity,
                supplier: fields::pick(&mut self.rng, self.catalog.supplier_names).to_string(),
                import_price,
                last_updated,
                long_stock_alert_days: self.rng.gen_range(30..90),
                created_at: self.millis_ago(60 * DAY_MS),
                updated_at: self.millis_ago(7 * DAY_MS),
            };
            data.materials.insert(id, material);
        }
        debug!(count = data.materials.len(), "materials populated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::Catalog;
    use chrono::{TimeZone, Utc};

    fn generator(config: GeneratorConfig) -> Generator<rand::rngs::StdRng> {
        let now = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
        Generator::seeded(config, 11, now).unwrap()
    }

    #[test]
    fn pool_backed_counts_do_not_wrap() {
        let mut gen = generator(GeneratorConfig {
            num_departments: 9,
            num_categories: 40,
            num_materials: 40,
            ..GeneratorConfig::default()
        });
        let mut data = Dataset::default();
        gen.populate_departments(&mut data);
        gen.populate_categories(&mut data);
        gen.populate_materials(&mut data);

        assert_eq!(data.departments.len(), 5);
        assert_eq!(data.categories.len(), 5);
        assert_eq!(data.materials.len(), 10);
    }

    #[test]
    fn workers_are_spread_per_department() {
        let mut gen = generator(GeneratorConfig {
            num_departments: 3,
            num_workers_per_dept: 2,
            ..GeneratorConfig::default()
        });
        let mut data = Dataset::default();
        gen.populate_departments(&mut data);
        gen.populate_members(&mut data);

        let workers = data.member_ids_with_role(Role::Worker);
        assert_eq!(workers.len(), 6);
        assert_eq!(data.member_ids_with_role(Role::Sales).len(), 5);

        let first = data.member(&MemberId::from("WORKER_001")).unwrap();
        let third = data.member(&MemberId::from("WORKER_003")).unwrap();
        assert_eq!(first.departments, [DepartmentCode::from("DEPT_001")]);
        assert_eq!(third.departments, [DepartmentCode::from("DEPT_002")]);
        assert!(data
            .member(&MemberId::from("SALES_001"))
            .unwrap()
            .departments
            .is_empty());
    }

    #[test]
    fn workflows_follow_generated_departments() {
        let mut gen = generator(GeneratorConfig {
            num_departments: 2,
            ..GeneratorConfig::default()
        });
        let mut data = Dataset::default();
        gen.populate_departments(&mut data);
        gen.populate_workflows(&mut data);

        // 3 cutting + 4 sewing templates
        assert_eq!(data.workflows.len(), 7);
        assert_eq!(
            data.workflow(&WorkflowId::from("WF_004")).unwrap().department,
            DepartmentCode::from("DEPT_002")
        );
    }

    #[test]
    fn unknown_material_names_fall_back_to_random_profile() {
        let catalog = Catalog {
            material_names: &["Vải cotton", "Keo dán"],
            ..Catalog::standard()
        };
        let mut gen = generator(GeneratorConfig::default()).with_catalog(catalog);
        let mut data = Dataset::default();
        gen.populate_materials(&mut data);

        let known = data.material(&MaterialId::from("MAT_000001")).unwrap();
        assert_eq!((known.category.as_str(), known.unit.as_str()), ("Vải", "m2"));

        let unknown = data.material(&MaterialId::from("MAT_000002")).unwrap();
        assert!(catalog.category_names.contains(&unknown.category.as_str()));
        assert!(catalog.units.contains(&unknown.unit.as_str()));
        assert!(unknown.max_capacity >= unknown.stock_quantity + 500);
    }
}
