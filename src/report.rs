use crate::{assignment::Plan, Instance};
use chrono::{Local, NaiveDateTime};
use std::fmt;

/// Human-readable rendering of a plan.
pub struct Report<'a> {
    instance: &'a Instance,
    plan: &'a Plan,
    generated: NaiveDateTime,
}

impl<'a> Report<'a> {
    pub fn new(instance: &'a Instance, plan: &'a Plan) -> Self {
        Self {
            instance,
            plan,
            generated: Local::now().naive_local(),
        }
    }

    pub fn generated_at(mut self, generated: NaiveDateTime) -> Self {
        self.generated = generated;
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "~~ FietSAT report @ {} ~~\n",
            self.generated.format("%H:%M, %b %d %Y")
        )?;
        writeln!(f, "Number of drivers: {}", self.instance.drivers().len())?;
        writeln!(f, "Number of routes: {}\n", self.instance.routes().len())?;

        let assignment = match self.plan {
            Plan::Infeasible => return writeln!(f, "SAT? No"),
            Plan::Staffed(assignment) => assignment,
        };

        writeln!(f, "SAT? Yes")?;
        for (route_id, staffing) in assignment.iter() {
            match self.instance.route(route_id) {
                Some(route) => writeln!(f, "\n{}:", route)?,
                None => writeln!(f, "\nRoute {}:", route_id)?,
            }
            // Most experienced first
            for slot in staffing.slots().rev() {
                let name = self
                    .instance
                    .driver(slot.driver)
                    .map(|driver| driver.name.as_str())
                    .unwrap_or("?");
                writeln!(
                    f,
                    "\tDriver {} ({}) @ exp. level {}",
                    slot.driver, name, slot.tier
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
use crate::{
    assignment::{Assignment, Staffing},
    Driver, Route, Tier,
};
#[cfg(test)]
use chrono::NaiveDate;

#[cfg(test)]
fn instance() -> Instance {
    Instance::new(
        vec![
            Driver::new(1, "Ann", Tier::new(1).unwrap(), vec![1]),
            Driver::new(2, "Bas", Tier::new(2).unwrap(), vec![1]),
            Driver::new(3, "Cor", Tier::new(3).unwrap(), vec![1]),
            Driver::new(4, "Dik", Tier::new(4).unwrap(), vec![1]),
        ],
        vec![Route::new(1, "Delft", "Gouda")],
    )
    .unwrap()
}

#[cfg(test)]
fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 7)
        .and_then(|date| date.and_hms_opt(12, 5, 0))
        .unwrap()
}

#[test]
fn renders_staffed_plan() {
    let instance = instance();
    let mut assignment = Assignment::default();
    assignment.insert(1, Staffing::new([1, 2, 3, 4]));
    let plan = Plan::Staffed(assignment);

    let text = Report::new(&instance, &plan).generated_at(noon()).to_string();
    assert_eq!(
        text,
        "~~ FietSAT report @ 12:05, Mar 07 2024 ~~\n\n\
         Number of drivers: 4\n\
         Number of routes: 1\n\n\
         SAT? Yes\n\n\
         Route 1 (Delft – Gouda):\n\
         \tDriver 4 (Dik) @ exp. level 4\n\
         \tDriver 3 (Cor) @ exp. level 3\n\
         \tDriver 2 (Bas) @ exp. level 2\n\
         \tDriver 1 (Ann) @ exp. level 1\n"
    );
}

#[test]
fn renders_infeasible_plan() {
    let instance = instance();
    let text = Report::new(&instance, &Plan::Infeasible)
        .generated_at(noon())
        .to_string();
    assert!(text.ends_with("Number of routes: 1\n\nSAT? No\n"));
}
