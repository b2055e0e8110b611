//! Bundled portfolio content (compiled into binary)
//!
//! Used unless `content` in the config points at another file with the same
//! layout. `folio print` dumps the resolved content for reference.

pub const CONTENT: &str = r##"# Portfolio content for folio
# Copy this file, edit it, and point `content` in config.toml at the copy.

[profile]
name = "Phanidhar"
surname = "Akula"
role = "Full-Stack Engineer"
badge = "Open to Full-Stack roles"
description = "Full-stack engineer shipping user-facing features end-to-end, from UI to APIs to deployment, with performance, reliability, and crisp UX."
location = "Oxford, Ohio"
email = "phanidharakula@gmail.com"

[hero]
lead = "I ship"
phrases = [
    "end-to-end product features",
    "fast, reliable web experiences",
    "APIs and data models that scale",
    "interfaces users actually enjoy",
]

# ─── About ────────────────────────────────────────────────────

[about]
greeting = "Hello! I'm Phanidhar"
paragraphs = [
    "I'm an AI Systems Engineer with expertise in HPC Simulations, Generative AI, and Full-Stack Development. Currently pursuing my Master's in Computer Science at Miami University (GPA: 3.83), I specialize in building scalable AI-powered applications and high-performance computing solutions.",
    "As a Graduate Assistant, I lead AI-based geospatial research on digital cities using Ohio Supercomputer Center (OSC) and build reproducible HPC benchmarks. I also serve as the President of the Graduate Students of Color Association (GSCA), leading 100+ members.",
    "My passion lies in building intelligent systems that scale. From LumiAI (an AI-powered educational platform) to cross-simulator benchmarks for urban simulations, I love tackling complex problems with cutting-edge technology.",
]
technologies = [
    "React", "Next.js", "TypeScript", "Node.js", "Python", "MongoDB",
    "PostgreSQL", "AWS", "Docker", "Tailwind", "OpenAI", "Git",
]
facts = [
    "Graduate Assistant at Miami University",
    "GSCA President (100+ members)",
    "HPC research on OSC Supercomputer",
    "Building AI-powered applications",
]

[about.header]
label = "About Me"
title = "Turning Ideas Into Reality"
subtitle = "A passionate developer who loves building innovative solutions and creating exceptional user experiences."

[[about.stats]]
value = "3.83"
label = "GPA"

[[about.stats]]
value = "10+"
label = "Projects Completed"

[[about.stats]]
value = "MS"
label = "Computer Science"

[[about.stats]]
value = "OH"
label = "Oxford, USA"

[about.education]
degree = "Master of Science"
field = "Computer Science"
school = "Miami University"
location = "Oxford, Ohio"
period = "Aug 2024 - May 2026"
focus = ["Generative AI", "Machine Learning", "Software Quality", "Cryptography"]

# ─── Skills ───────────────────────────────────────────────────

[skills.header]
label = "Technical Skills"
title = "Tools & Technologies"
subtitle = "A comprehensive overview of my technical expertise and the technologies I work with daily."

[[skills.categories]]
title = "Frontend"
description = "Building beautiful, responsive user interfaces"
skills = [
    { name = "React", level = 95 },
    { name = "Next.js", level = 90 },
    { name = "TypeScript", level = 88 },
    { name = "JavaScript", level = 95 },
    { name = "Tailwind CSS", level = 92 },
    { name = "HTML5", level = 98 },
    { name = "CSS3", level = 95 },
    { name = "Redux", level = 85 },
]

[[skills.categories]]
title = "Backend"
description = "Designing robust server-side solutions"
skills = [
    { name = "Node.js", level = 92 },
    { name = "Python", level = 88 },
    { name = "Express.js", level = 90 },
    { name = "Java", level = 80 },
    { name = "GraphQL", level = 82 },
    { name = "MongoDB", level = 88 },
    { name = "PostgreSQL", level = 85 },
    { name = "Firebase", level = 86 },
]

[[skills.categories]]
title = "AI & ML"
description = "Creating intelligent, data-driven applications"
skills = [
    { name = "OpenAI API", level = 90 },
    { name = "TensorFlow", level = 75 },
    { name = "PyTorch", level = 72 },
    { name = "Python ML", level = 85 },
]

[[skills.categories]]
title = "DevOps & Tools"
description = "Streamlining development and deployment"
skills = [
    { name = "Git", level = 95 },
    { name = "Docker", level = 82 },
    { name = "AWS", level = 78 },
    { name = "Kubernetes", level = 70 },
    { name = "Vercel", level = 90 },
    { name = "Figma", level = 88 },
]

# ─── Projects ─────────────────────────────────────────────────

[projects.header]
label = "Playground"
title = "Featured Projects"
subtitle = "A selection of products I've designed, built, and shipped."

[[projects.items]]
title = "LumiAI: AI-Powered Educational Platform"
description = "Lumi AI is an intelligent study assistant designed to help students learn more effectively by leveraging AI to provide insights, summaries, and answer questions about their study materials."
link = "https://studywithlumi.com"

[[projects.items]]
title = "Pathfinders Overseas Education"
description = "A website for an overseas education consultancy that provides comprehensive information and services to students seeking to study abroad."
link = "https://app.pathfindersoverseas.com"

[[projects.items]]
title = "Pathfinders CRM Portal"
description = "A CRM portal for Pathfinders that manages client relationships, offering services for overseas education consultations."
link = "https://github.com/AkulaPhanidhar"

[[projects.items]]
title = "Spetech E-Commerce Website"
description = "An e-commerce platform for a tech startup that specializes in sustainable and eco-friendly products."
link = "https://github.com/AkulaPhanidhar/Spetech-E-commerce.git"

# ─── Experience ───────────────────────────────────────────────

[experience.header]
label = "Career Journey"
title = "Work Experience"
subtitle = "A timeline of my professional journey and the impact I've made."

[[experience.roles]]
title = "Graduate Assistant"
company = "Miami University – Department of CS & SE"
location = "Oxford, OH"
period = "Aug 2025 - Present"
current = true
highlights = [
    "Lead AI-based geospatial research on digital cities using OSC and build reproducible HPC benchmarks",
    "Serve as GCSP Assistant: advise 10+ scholars, and support student research pathways",
    "Manage operations: run social media (3K followers, 2K reach), coordinate annual meetings and events",
]
technologies = ["Python", "MPI", "OpenMP", "SLURM", "HPC", "PostGIS"]

[[experience.roles]]
title = "President"
company = "Graduate Students of Color Association (GSCA)"
location = "Oxford, OH"
period = "Aug 2025 - Present"
current = true
highlights = [
    "Lead a graduate organization of 100+ students, advancing diversity, equity, and inclusion across campus",
    "Organize 5+ campus-wide events with 80+ attendees, strengthening GSCA's reputation and reach",
    "Secure alumni and departmental partnerships, boosting visibility by 45% and expanding sponsorships",
]
technologies = ["Leadership", "Event Management", "Community Building"]

# ─── Testimonials ─────────────────────────────────────────────

[testimonials.header]
label = "Testimonials"
title = "What People Say"
subtitle = "Feedback from professors, colleagues, and collaborators I've had the pleasure of working with."

[[testimonials.items]]
name = "Dr. DJ Rao"
role = "Associate Professor"
organization = "Miami University"
quote = "Phanidhar approaches complex technical problems methodically and with strong attention to detail. In our research work, he consistently translated abstract ideas into working, reproducible systems and demonstrated solid judgment when reasoning about performance and design trade-offs."
link = "https://www.linkedin.com/in/dj-rao/"
rating = 5

[[testimonials.items]]
name = "Rakesh Reddy"
role = "Founder & CEO"
organization = "Pathfinders Overseas Educations"
quote = "Phanidhar was reliable in delivering production-ready features across both frontend and backend. He communicated clearly, adapted quickly to feedback, and wrote code that was easy for the team to maintain and build on."
link = "https://www.linkedin.com/in/rakesh-reddy-saradigari-1b7ba921b/"
rating = 5

# ─── Contact ──────────────────────────────────────────────────

[contact]
heading = "Ready to start something amazing?"
text = "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision. Let's create something extraordinary together."

[contact.header]
label = "Get In Touch"
title = "Let's Work Together"
subtitle = "Have a project in mind or want to discuss opportunities? I'd love to hear from you."

[[contact.socials]]
name = "LinkedIn"
href = "https://linkedin.com/in/phanidharakula"

[[contact.socials]]
name = "GitHub"
href = "https://github.com/phanidharakula"

[[contact.socials]]
name = "LeetCode"
href = "https://leetcode.com/u/PhanidharAkula/"

[[contact.socials]]
name = "Twitter"
href = "https://twitter.com"
"##;
