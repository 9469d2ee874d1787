//! Built-in records used when storage holds no prior state.

use crate::model::employee::{Employee, EmployeeId, EmployeeProfile, SchemaVariant};

struct Sample {
    id: u64,
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone: &'static str,
    department: &'static str,
    position: &'static str,
    start_date: &'static str,
    birth_date: &'static str,
    salary: f64,
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: 1,
        first_name: "Ahmet",
        last_name: "Yılmaz",
        email: "ahmet.yilmaz@company.com",
        phone: "+90 532 123 4567",
        department: "Engineering",
        position: "Senior",
        start_date: "2022-03-15",
        birth_date: "1990-04-12",
        salary: 85_000.0,
    },
    Sample {
        id: 2,
        first_name: "Elif",
        last_name: "Kaya",
        email: "elif.kaya@company.com",
        phone: "+90 535 987 6543",
        department: "Design",
        position: "Mid",
        start_date: "2023-01-10",
        birth_date: "1994-09-03",
        salary: 75_000.0,
    },
    Sample {
        id: 3,
        first_name: "Mehmet",
        last_name: "Demir",
        email: "mehmet.demir@company.com",
        phone: "+90 533 456 7890",
        department: "Product",
        position: "Senior",
        start_date: "2021-11-20",
        birth_date: "1987-01-28",
        salary: 95_000.0,
    },
    Sample {
        id: 4,
        first_name: "Ayşe",
        last_name: "Özkan",
        email: "ayse.ozkan@company.com",
        phone: "+90 534 789 0123",
        department: "Marketing",
        position: "Junior",
        start_date: "2023-06-01",
        birth_date: "1998-06-17",
        salary: 60_000.0,
    },
    Sample {
        id: 5,
        first_name: "Can",
        last_name: "Kılıç",
        email: "can.kilic@company.com",
        phone: "+90 536 111 2233",
        department: "Engineering",
        position: "Mid",
        start_date: "2022-09-12",
        birth_date: "1992-11-05",
        salary: 80_000.0,
    },
];

/// Sample roster shaped for `variant`.
pub fn sample_employees(variant: SchemaVariant) -> Vec<Employee> {
    SAMPLES
        .iter()
        .map(|sample| Employee {
            id: EmployeeId::new(sample.id),
            first_name: sample.first_name.to_string(),
            last_name: sample.last_name.to_string(),
            email: sample.email.to_string(),
            phone: sample.phone.to_string(),
            department: sample.department.to_string(),
            position: sample.position.to_string(),
            start_date: sample.start_date.to_string(),
            profile: match variant {
                SchemaVariant::Minimal => EmployeeProfile::Minimal,
                SchemaVariant::WithBirthDate => EmployeeProfile::WithBirthDate {
                    birth_date: sample.birth_date.to_string(),
                },
                SchemaVariant::WithSalary => EmployeeProfile::WithSalary {
                    salary: sample.salary,
                },
            },
        })
        .collect()
}
