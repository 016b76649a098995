//! Static word lists backing the generators

pub const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry", "Ivy", "Jack",
    "Kate", "Liam", "Mia", "Noah", "Olivia", "Peter", "Quinn", "Ruby", "Sam", "Tina",
    "Uma", "Victor", "Willow", "Xander", "Yara", "Zoe", "Aaron", "Bella", "Connor", "Delia",
];

pub const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Davis", "Evans", "Fisher", "Garcia", "Harris", "Johnson", "King", "Lopez",
    "Miller", "Nelson", "Oliveira", "Parker", "Quinn", "Roberts", "Smith", "Taylor", "Underwood", "Valdez",
    "Williams", "Xavier", "Young", "Zhang", "Adams", "Bell", "Clark", "Duncan", "Edwards", "Ford",
];

pub const STREETS: &[&str] = &[
    "Main St", "Oak Ave", "Elm Dr", "Park Blvd", "Cedar Ln", "Maple Way", "Pine St", "River Rd",
    "Hill Ave", "Lake Dr", "Forest Ln", "Garden St", "Valley Rd", "Spring Ave", "Sunset Blvd",
];

pub const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Franklin", "Georgetown", "Fairview", "Madison", "Arlington", "Salem",
    "Richmond", "Columbia", "Austin", "Denver", "Phoenix", "Portland", "Seattle", "Boston",
];

pub const STATES: &[&str] = &[
    "California", "Texas", "Florida", "New York", "Pennsylvania", "Illinois", "Ohio", "Georgia",
    "North Carolina", "Michigan", "New Jersey", "Virginia", "Washington", "Arizona", "Massachusetts",
];

pub const COMPANY_PREFIXES: &[&str] = &[
    "Acme", "Global", "United", "Premium", "Elite", "Advanced", "Dynamic", "Smart",
];

pub const COMPANY_SUFFIXES: &[&str] = &[
    "Corp", "Inc", "LLC", "Solutions", "Systems", "Technologies", "Enterprises", "Group",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "test.org", "demo.net", "sample.io", "fake.dev",
];

pub const TLDS: &[&str] = &["com", "net", "org"];

pub const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
    "sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et",
    "dolore", "magna", "aliqua", "enim", "ad", "minim", "veniam", "quis",
    "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip", "ex", "ea",
    "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit", "voluptate",
];
