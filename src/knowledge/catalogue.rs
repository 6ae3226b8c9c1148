//! Built-in role catalogue, fallback companies and project ideas

pub(super) struct RoleEntry {
    pub name: &'static str,
    pub category: Option<&'static str>,
    pub core: &'static [&'static str],
    pub important: &'static [&'static str],
    pub nice: &'static [&'static str],
}

pub(super) struct CompanyEntry {
    pub name: &'static str,
    pub kind: &'static str,
    pub careers_url: &'static str,
}

pub(super) const ROLES: &[RoleEntry] = &[
    RoleEntry {
        name: "data scientist",
        category: None,
        core: &["python", "machine learning", "statistics", "data analysis", "sql"],
        important: &[
            "deep learning", "pandas", "numpy", "scikit-learn", "data visualization",
            "tensorflow", "pytorch", "nlp", "r", "jupyter",
        ],
        nice: &[
            "spark", "hadoop", "aws", "docker", "git", "tableau", "power bi",
            "keras", "matplotlib", "seaborn", "feature engineering", "a/b testing",
        ],
    },
    RoleEntry {
        name: "data analyst",
        category: None,
        core: &["sql", "excel", "data analysis", "python", "data visualization"],
        important: &[
            "tableau", "power bi", "pandas", "statistics", "r",
            "google analytics", "reporting", "dashboard",
        ],
        nice: &[
            "machine learning", "jupyter", "vba", "looker", "dax",
            "etl", "data warehousing", "bigquery",
        ],
    },
    RoleEntry {
        name: "web developer",
        category: None,
        core: &["html", "css", "javascript", "responsive design", "git"],
        important: &[
            "react", "node.js", "typescript", "rest api", "sql",
            "mongodb", "sass", "webpack", "tailwind css",
        ],
        nice: &[
            "next.js", "vue.js", "angular", "graphql", "docker", "aws",
            "firebase", "redis", "ci/cd", "testing", "figma",
        ],
    },
    RoleEntry {
        name: "frontend developer",
        category: None,
        core: &["html", "css", "javascript", "react", "responsive design"],
        important: &[
            "typescript", "redux", "sass", "webpack", "git",
            "tailwind css", "next.js", "figma", "rest api",
        ],
        nice: &[
            "vue.js", "angular", "graphql", "testing", "storybook",
            "accessibility", "performance optimization", "pwa",
        ],
    },
    RoleEntry {
        name: "backend developer",
        category: None,
        core: &["python", "sql", "rest api", "git", "databases"],
        important: &[
            "node.js", "java", "docker", "postgresql", "mongodb",
            "redis", "microservices", "linux", "aws",
        ],
        nice: &[
            "kubernetes", "graphql", "rabbitmq", "kafka", "ci/cd",
            "terraform", "nginx", "elasticsearch", "grpc",
        ],
    },
    RoleEntry {
        name: "full stack developer",
        category: None,
        core: &["html", "css", "javascript", "python", "sql", "git"],
        important: &[
            "react", "node.js", "rest api", "mongodb", "docker",
            "typescript", "postgresql", "aws",
        ],
        nice: &[
            "next.js", "graphql", "redis", "kubernetes", "ci/cd",
            "tailwind css", "firebase", "testing",
        ],
    },
    RoleEntry {
        name: "software engineer",
        category: None,
        core: &["data structures", "algorithms", "python", "git", "oop"],
        important: &[
            "system design", "sql", "java", "c++", "linux",
            "rest api", "docker", "testing", "databases",
        ],
        nice: &[
            "kubernetes", "aws", "microservices", "ci/cd", "agile",
            "design patterns", "distributed systems", "golang",
        ],
    },
    RoleEntry {
        name: "machine learning engineer",
        category: None,
        core: &["python", "machine learning", "deep learning", "tensorflow", "mathematics"],
        important: &[
            "pytorch", "scikit-learn", "nlp", "computer vision", "sql",
            "docker", "mlops", "feature engineering", "pandas",
        ],
        nice: &[
            "kubernetes", "spark", "aws sagemaker", "kubeflow", "onnx",
            "model optimization", "a/b testing", "rust",
        ],
    },
    RoleEntry {
        name: "devops engineer",
        category: None,
        core: &["linux", "docker", "ci/cd", "aws", "git"],
        important: &[
            "kubernetes", "terraform", "ansible", "jenkins", "python",
            "monitoring", "networking", "bash scripting",
        ],
        nice: &[
            "prometheus", "grafana", "helm", "argocd", "gcp", "azure",
            "security", "istio", "pulumi",
        ],
    },
    RoleEntry {
        name: "cloud engineer",
        category: None,
        core: &["aws", "linux", "networking", "docker", "security"],
        important: &[
            "terraform", "kubernetes", "ci/cd", "python", "gcp",
            "azure", "iam", "serverless", "monitoring",
        ],
        nice: &[
            "cloudformation", "ansible", "cost optimization", "compliance",
            "databricks", "snowflake", "kafka",
        ],
    },
    RoleEntry {
        name: "mobile developer",
        category: None,
        core: &["java", "kotlin", "swift", "mobile ui", "git"],
        important: &[
            "react native", "flutter", "rest api", "firebase",
            "android sdk", "ios sdk", "sql",
        ],
        nice: &[
            "graphql", "ci/cd", "testing", "push notifications",
            "app store optimization", "redux", "typescript",
        ],
    },
    RoleEntry {
        name: "android developer",
        category: None,
        core: &["java", "kotlin", "android sdk", "xml", "git"],
        important: &[
            "jetpack compose", "mvvm", "rest api", "firebase",
            "room database", "coroutines", "material design",
        ],
        nice: &[
            "flutter", "ci/cd", "testing", "dagger/hilt", "graphql",
            "app performance", "kotlin multiplatform",
        ],
    },
    RoleEntry {
        name: "ios developer",
        category: None,
        core: &["swift", "xcode", "uikit", "ios sdk", "git"],
        important: &[
            "swiftui", "core data", "rest api", "cocoapods",
            "mvvm", "auto layout", "combine",
        ],
        nice: &[
            "objective-c", "firebase", "ci/cd", "testing", "arkit",
            "core ml", "app store connect",
        ],
    },
    RoleEntry {
        name: "cybersecurity analyst",
        category: None,
        core: &["network security", "linux", "firewalls", "incident response", "siem"],
        important: &[
            "penetration testing", "vulnerability assessment", "python",
            "encryption", "compliance", "ids/ips", "malware analysis",
        ],
        nice: &[
            "aws security", "forensics", "threat intelligence", "splunk",
            "wireshark", "burp suite", "oscp",
        ],
    },
    RoleEntry {
        name: "ui/ux designer",
        category: None,
        core: &["figma", "user research", "wireframing", "prototyping", "usability testing"],
        important: &[
            "adobe xd", "sketch", "design systems", "information architecture",
            "interaction design", "accessibility", "html", "css",
        ],
        nice: &[
            "motion design", "illustration", "after effects", "framer",
            "analytics", "a/b testing", "branding",
        ],
    },
    RoleEntry {
        name: "product manager",
        category: None,
        core: &["product strategy", "roadmapping", "user research", "data analysis", "agile"],
        important: &[
            "jira", "sql", "a/b testing", "stakeholder management",
            "market research", "wireframing", "okrs",
        ],
        nice: &[
            "python", "tableau", "figma", "pricing strategy", "go-to-market",
            "competitive analysis", "technical writing",
        ],
    },
    RoleEntry {
        name: "data engineer",
        category: None,
        core: &["sql", "python", "etl", "data warehousing", "spark"],
        important: &[
            "airflow", "kafka", "aws", "snowflake", "databricks",
            "hadoop", "docker", "data modeling",
        ],
        nice: &[
            "kubernetes", "dbt", "flink", "terraform", "ci/cd",
            "scala", "bigquery", "redshift",
        ],
    },
    RoleEntry {
        name: "ai engineer",
        category: None,
        core: &["python", "machine learning", "deep learning", "nlp", "mathematics"],
        important: &[
            "tensorflow", "pytorch", "transformers", "langchain", "llm",
            "computer vision", "mlops", "docker",
        ],
        nice: &[
            "rust", "cuda", "onnx", "kubernetes", "aws", "vector databases",
            "reinforcement learning", "generative ai",
        ],
    },
    RoleEntry {
        name: "business analyst",
        category: None,
        core: &["data analysis", "sql", "excel", "requirements gathering", "reporting"],
        important: &[
            "tableau", "power bi", "jira", "agile", "process mapping",
            "stakeholder management", "documentation",
        ],
        nice: &[
            "python", "r", "uml", "erp systems", "sap", "salesforce",
            "data modeling", "six sigma",
        ],
    },
    RoleEntry {
        name: "qa engineer",
        category: None,
        core: &["testing", "test automation", "selenium", "bug tracking", "sql"],
        important: &[
            "python", "java", "api testing", "jira", "git",
            "performance testing", "ci/cd", "agile",
        ],
        nice: &[
            "cypress", "playwright", "k6", "docker", "mobile testing",
            "security testing", "testng", "cucumber",
        ],
    },
    // Mechanical engineering
    RoleEntry {
        name: "mechanical design engineer",
        category: Some("Mechanical Engineering"),
        core: &["solidworks", "autocad", "mechanical design", "gd&t", "manufacturing processes"],
        important: &[
            "fea", "ansys", "catia", "thermodynamics", "material science",
            "3d printing", "creo", "tolerance analysis",
        ],
        nice: &[
            "python", "matlab", "six sigma", "lean manufacturing", "plm",
            "sheet metal design", "injection molding", "dfm/dfa",
        ],
    },
    RoleEntry {
        name: "robotics engineer",
        category: Some("Mechanical Engineering"),
        core: &["python", "ros", "c++", "control systems", "kinematics"],
        important: &[
            "sensors", "actuators", "embedded systems", "matlab", "computer vision",
            "linux", "solidworks", "plc programming",
        ],
        nice: &[
            "deep learning", "slam", "gazebo", "opencv", "tensorflow",
            "reinforcement learning", "pcb design", "arduino",
        ],
    },
    // Electrical and electronics engineering
    RoleEntry {
        name: "embedded systems engineer",
        category: Some("Electronics Engineering"),
        core: &["c", "c++", "microcontrollers", "rtos", "embedded linux"],
        important: &[
            "arm", "pcb design", "uart", "spi", "i2c",
            "debugging", "firmware", "oscilloscope",
        ],
        nice: &[
            "python", "fpga", "ble", "can bus", "iot",
            "freertos", "zephyr", "device drivers",
        ],
    },
    RoleEntry {
        name: "vlsi design engineer",
        category: Some("Electronics Engineering"),
        core: &["verilog", "vhdl", "digital design", "fpga", "asic design"],
        important: &[
            "cadence", "synopsys", "sta", "synthesis", "floorplanning",
            "dft", "low power design", "clock tree synthesis",
        ],
        nice: &[
            "tcl scripting", "perl", "python", "uvm", "system verilog",
            "analog design", "spice", "layout design",
        ],
    },
    RoleEntry {
        name: "iot engineer",
        category: Some("Electronics Engineering"),
        core: &["python", "embedded c", "sensors", "mqtt", "cloud platforms"],
        important: &[
            "raspberry pi", "arduino", "aws iot", "ble", "wifi",
            "node.js", "edge computing", "pcb design",
        ],
        nice: &[
            "machine learning", "docker", "grafana", "influxdb", "lorawan",
            "zigbee", "tensorflow lite", "security",
        ],
    },
    RoleEntry {
        name: "electrical design engineer",
        category: Some("Electrical Engineering"),
        core: &[
            "autocad electrical", "circuit design", "power systems",
            "plc programming", "electrical safety",
        ],
        important: &[
            "scada", "hmi", "motor drives", "transformers", "relay protection",
            "iec standards", "eplan", "matlab",
        ],
        nice: &[
            "python", "embedded systems", "renewable energy", "power electronics",
            "ethernet/ip", "modbus", "siemens tia portal", "allen bradley",
        ],
    },
    // Civil engineering
    RoleEntry {
        name: "structural engineer",
        category: Some("Civil Engineering"),
        core: &["staad pro", "etabs", "autocad", "structural analysis", "concrete design"],
        important: &[
            "steel design", "revit", "sap2000", "foundation design", "earthquake engineering",
            "is codes", "quantity surveying", "primavera",
        ],
        nice: &[
            "python", "bim", "tekla", "safe", "ansys",
            "cost estimation", "ms project", "3d modeling",
        ],
    },
    RoleEntry {
        name: "construction manager",
        category: Some("Civil Engineering"),
        core: &[
            "project management", "autocad", "cost estimation", "scheduling",
            "construction methods",
        ],
        important: &[
            "primavera", "ms project", "bim", "revit", "quantity surveying",
            "contract management", "safety management", "quality control",
        ],
        nice: &[
            "lean construction", "python", "gis", "drone surveying",
            "leed certification", "six sigma", "erp systems", "stakeholder management",
        ],
    },
    // Additional IT roles
    RoleEntry {
        name: "blockchain developer",
        category: Some("IT / Software"),
        core: &["solidity", "ethereum", "smart contracts", "web3.js", "javascript"],
        important: &[
            "react", "node.js", "truffle", "hardhat", "defi",
            "cryptography", "ipfs", "git",
        ],
        nice: &[
            "rust", "golang", "layer 2", "nft", "dao",
            "hyperledger", "polkadot", "security auditing",
        ],
    },
    RoleEntry {
        name: "game developer",
        category: Some("IT / Software"),
        core: &["unity", "c#", "game design", "3d math", "physics engine"],
        important: &[
            "unreal engine", "c++", "shader programming", "animation", "git",
            "blender", "ai programming", "multiplayer networking",
        ],
        nice: &[
            "ar/vr", "procedural generation", "mobile games", "steam sdk",
            "sound design", "ue blueprints", "godot", "playtesting",
        ],
    },
    RoleEntry {
        name: "network engineer",
        category: Some("IT / Networking"),
        core: &["networking", "cisco", "routing", "switching", "firewalls"],
        important: &[
            "tcp/ip", "vpn", "dns", "dhcp", "linux",
            "wireshark", "subnetting", "load balancing",
        ],
        nice: &[
            "python", "ansible", "sd-wan", "cloud networking", "ccnp",
            "network automation", "ipv6", "bgp",
        ],
    },
    RoleEntry {
        name: "database administrator",
        category: Some("IT / Software"),
        core: &[
            "sql", "database design", "backup and recovery", "performance tuning", "security",
        ],
        important: &[
            "oracle", "sql server", "postgresql", "mysql", "replication",
            "indexing", "query optimization", "monitoring",
        ],
        nice: &[
            "python", "mongodb", "redis", "cloud databases", "automation",
            "data modeling", "etl", "high availability",
        ],
    },
    RoleEntry {
        name: "technical writer",
        category: Some("IT / Content"),
        core: &[
            "technical writing", "documentation", "api documentation", "markdown",
            "content strategy",
        ],
        important: &[
            "git", "html", "css", "swagger", "jira",
            "confluence", "information architecture", "editing",
        ],
        nice: &[
            "python", "javascript", "dita", "readthedocs", "postman",
            "seo", "video scripting", "ux writing",
        ],
    },
    // Interdisciplinary engineering
    RoleEntry {
        name: "biomedical engineer",
        category: Some("Biomedical Engineering"),
        core: &["matlab", "signal processing", "medical devices", "biology", "physiology"],
        important: &[
            "python", "fda regulations", "biomechanics", "medical imaging", "statistics",
            "labview", "solidworks", "clinical trials",
        ],
        nice: &[
            "machine learning", "deep learning", "3d printing", "arduino",
            "r", "bioinformatics", "iso 13485", "risk management",
        ],
    },
    RoleEntry {
        name: "environmental engineer",
        category: Some("Environmental Engineering"),
        core: &[
            "wastewater treatment", "environmental impact assessment", "air quality",
            "gis", "sustainability",
        ],
        important: &[
            "autocad", "water resources", "solid waste management", "eia regulations", "python",
            "remote sensing", "environmental monitoring", "hse",
        ],
        nice: &[
            "matlab", "qgis", "climate modeling", "renewable energy",
            "iso 14001", "life cycle assessment", "carbon footprint", "data analysis",
        ],
    },
];

pub(super) const HIGH_TIER_COMPANIES: &[CompanyEntry] = &[
    CompanyEntry { name: "Google", kind: "Top Tech", careers_url: "https://careers.google.com" },
    CompanyEntry { name: "Microsoft", kind: "Top Tech", careers_url: "https://careers.microsoft.com" },
    CompanyEntry { name: "Amazon", kind: "Top Tech", careers_url: "https://www.amazon.jobs" },
    CompanyEntry { name: "Apple", kind: "Top Tech", careers_url: "https://jobs.apple.com" },
    CompanyEntry { name: "Meta", kind: "Top Tech", careers_url: "https://www.metacareers.com" },
    CompanyEntry { name: "Netflix", kind: "Top Tech", careers_url: "https://jobs.netflix.com" },
];

pub(super) const MID_TIER_COMPANIES: &[CompanyEntry] = &[
    CompanyEntry { name: "TCS", kind: "IT Services", careers_url: "https://www.tcs.com/careers" },
    CompanyEntry { name: "Infosys", kind: "IT Services", careers_url: "https://www.infosys.com/careers" },
    CompanyEntry { name: "Wipro", kind: "IT Services", careers_url: "https://careers.wipro.com" },
    CompanyEntry { name: "Accenture", kind: "Consulting", careers_url: "https://www.accenture.com/careers" },
    CompanyEntry { name: "Cognizant", kind: "IT Services", careers_url: "https://careers.cognizant.com" },
    CompanyEntry { name: "Capgemini", kind: "Consulting", careers_url: "https://www.capgemini.com/careers" },
];

pub(super) const ENTRY_TIER_COMPANIES: &[CompanyEntry] = &[
    CompanyEntry { name: "Internshala", kind: "Internships", careers_url: "https://internshala.com" },
    CompanyEntry { name: "AngelList", kind: "Startups", careers_url: "https://angel.co/jobs" },
    CompanyEntry { name: "Freshworks", kind: "Startup", careers_url: "https://www.freshworks.com/company/careers" },
    CompanyEntry { name: "Zoho", kind: "Product Company", careers_url: "https://www.zoho.com/careers.html" },
    CompanyEntry { name: "Razorpay", kind: "Fintech", careers_url: "https://razorpay.com/jobs" },
    CompanyEntry { name: "Swiggy", kind: "Startup", careers_url: "https://careers.swiggy.com" },
];

pub(super) const PROJECT_IDEAS: &[(&str, &[&str])] = &[
    ("data scientist", &["Build ML Prediction Model", "Kaggle Competition", "Data Dashboard", "NLP Chatbot"]),
    ("web developer", &["Portfolio Website", "Full Stack App", "E-commerce Site", "Blog Platform"]),
    ("frontend developer", &["Interactive Dashboard", "Component Library", "PWA App", "Landing Pages"]),
    ("backend developer", &["REST API Service", "Auth System", "Real-time Chat", "Task Queue System"]),
    ("full stack developer", &["Social Media Clone", "Project Manager App", "E-commerce Platform"]),
    ("software engineer", &["Design Patterns Demo", "Distributed System", "CLI Tool", "API Gateway"]),
    ("mobile developer", &["Weather App", "Task Manager", "Social App", "Fitness Tracker"]),
    ("devops engineer", &["CI/CD Pipeline", "Monitoring Dashboard", "Infrastructure as Code", "Container Orchestration"]),
    ("machine learning engineer", &["Model Serving API", "AutoML Pipeline", "Computer Vision App"]),
    ("data analyst", &["Sales Dashboard", "Survey Analysis", "A/B Test Report", "Market Research"]),
    ("data engineer", &["ETL Pipeline", "Data Lake Setup", "Streaming Pipeline", "Data Warehouse"]),
    ("cybersecurity analyst", &["Vulnerability Scanner", "Network Monitor", "Security Audit Tool"]),
    ("ai engineer", &["LLM Application", "RAG System", "AI Agent", "Fine-tuned Model"]),
];
