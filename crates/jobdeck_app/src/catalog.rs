/// A fixed filter option offered by the board.
pub struct FilterOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const EMPLOYMENT_TYPES: [FilterOption; 4] = [
    FilterOption {
        id: "FULLTIME",
        label: "Full Time",
    },
    FilterOption {
        id: "PARTTIME",
        label: "Part Time",
    },
    FilterOption {
        id: "FREELANCE",
        label: "Freelance",
    },
    FilterOption {
        id: "INTERNSHIP",
        label: "Internship",
    },
];

pub const SALARY_RANGES: [FilterOption; 4] = [
    FilterOption {
        id: "1000000",
        label: "10 LPA and above",
    },
    FilterOption {
        id: "2000000",
        label: "20 LPA and above",
    },
    FilterOption {
        id: "3000000",
        label: "30 LPA and above",
    },
    FilterOption {
        id: "4000000",
        label: "40 LPA and above",
    },
];

pub fn is_employment_type(id: &str) -> bool {
    EMPLOYMENT_TYPES.iter().any(|option| option.id == id)
}

pub fn is_salary_range(id: &str) -> bool {
    SALARY_RANGES.iter().any(|option| option.id == id)
}
