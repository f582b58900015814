//! Static page content.

/// Page sections in navigation order.
pub const SECTIONS: &[Section] = &[
    Section::new("home", "Home"),
    Section::new("about", "About"),
    Section::new("skills", "Skills"),
    Section::new("projects", "Projects"),
    Section::new("experience", "Experience"),
    Section::new("education", "Education"),
    Section::new("contact", "Contact"),
];

pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    pub about: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub photo: &'static str,
    pub email: &'static str,
    pub github: SocialLink,
    pub linkedin: SocialLink,
}

pub struct SocialLink {
    pub url: &'static str,
    pub label: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Aman Verma",
    role: "Software Developer",
    summary: "Computer Science and Engineering graduate with hands-on experience in Java and Data Structures & Algorithms. Skilled in MERN stack development, building scalable and secure full-stack web applications.",
    about: &[
        "Computer Science and Engineering graduate with hands-on experience in Java and Data Structures & Algorithms. Skilled in MERN stack development, building scalable and secure full-stack web applications.",
        "Hands-on experience with AWS, including EC2, S3, RDS, Lambda, IAM, and CloudFormation. Experienced with Docker, CloudWatch, and cloud infrastructure optimization.",
    ],
    highlights: &["Clean Code", "UI/UX Design", "Performance"],
    photo: "/static/images/profile.svg",
    email: "amanverma15032003@gmail.com",
    github: SocialLink {
        url: "https://github.com/amanverma20",
        label: "github.com/amanverma20",
    },
    linkedin: SocialLink {
        url: "https://linkedin.com/in/aman305verma",
        label: "linkedin.com/in/aman305verma",
    },
};

pub const SKILLS: &[&str] = &[
    "Java",
    "JavaScript",
    "TypeScript",
    "ReactJS",
    "Node.js",
    "Express.js",
    "Next.js",
    "FastAPI",
    "MongoDB",
    "SQL",
    "Tailwind CSS",
    "HTML/CSS",
    "Git/GitHub",
    "Amazon Web Services",
    "Linux",
    "Docker",
    "VS Code",
    "Python",
    "Postman",
    "JWT",
    "Razorpay API Integration",
    "Email Services",
    "Deployment & CI/CD",
    "Software Testing",
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub live_url: &'static str,
    pub github_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Expense Tracker",
        description: "Developed a responsive and accessible UI, increasing user interactions by 40% and reducing drop-off rate by 25% and helping users to manage and monitor their daily income and expenses. Built and integrated RESTful APIs for seamless communication between frontend and backend services.",
        tech: &["MERN", "Ant Design", "MongoDB", "RESTful APIs"],
        image: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=800",
        live_url: "https://expense-tracker-system-ql75.onrender.com/",
        github_url: "https://github.com/amanverma20",
    },
    Project {
        title: "NutriSmart—AI-Driven Food Analysis",
        description: "Developed NutriSmart, an AI-powered menu scanner using AWS Textract for OCR, Bedrock Titan for dish image generation, and real-time nutrition insights. Built a personalized recommendation engine aligned with user dietary goals, allergies, and health conditions.",
        tech: &["React", "TypeScript", "AWS Textract", "AWS Bedrock"],
        image: "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg?auto=compress&cs=tinysrgb&w=800",
        live_url: "https://cute-beignet-6b220d.netlify.app/",
        github_url: "https://github.com/amanverma20",
    },
    Project {
        title: "Social Media Dashboard",
        description: "Deployed a React-based dashboard on AWS S3, using CloudFront for low-latency content delivery and high availability. Configured Route 53 with a custom domain and SSL encryption, ensuring secure and reliable access.",
        tech: &["AWS S3", "CloudFront", "Route 53", "React"],
        image: "https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg?auto=compress&cs=tinysrgb&w=800",
        live_url: "https://social-meadia-dashboard-1.onrender.com/",
        github_url: "https://github.com/amanverma20",
    },
];

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[Experience {
    title: "Full Stack Developer",
    company: "MetaGeeks Technologies",
    location: "Link",
    period: "Apr 2025 - Aug 2025",
    description: "Developed a full-featured Inventory Management System using the MERN stack, tracking over 1,000+ products and improving inventory accuracy by 30%.",
    achievements: &[
        "Integrated Razorpay for secure payments with 99.9% uptime and 20% faster checkout",
        "Implemented JWT, Nodemailer, and FastAPI for secure user registration, reducing unauthorized access by 40%",
        "Managed source code on GitHub, enabling efficient collaboration with 3+ contributors and streamlined version control",
    ],
    technologies: &["MERN Stack", "Razorpay", "JWT", "Nodemailer", "FastAPI"],
}];

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EDUCATION: &[Education] = &[Education {
    degree: "Bachelor of Technology in Computer Science and Engineering",
    institution: "Lloyd Institute of Engineering and Technology",
    location: "Greater Noida",
    period: "2021 - 2025",
    description: "Comprehensive study of software development, algorithms, and system design. Focused on Data Structures, Full Stack Development, Azure AI/ML, Database Management, Data Science, Software Engineering, Operating System, and Computer Network.",
    achievements: &[
        "CGPA: 8.0",
        "AWS Cloud Practitioner Certified",
        "500+ DSA Problems Solved",
        "90+ hours Java Programming Training",
    ],
}];
