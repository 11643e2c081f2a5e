//! Seed content for first runs.

use crate::models::BlogPost;

/// Sample posts written into the content store when nothing is persisted yet.
pub fn sample_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".to_string(),
            title: "Building Modern Web Applications with React and Node.js".to_string(),
            slug: "building-modern-web-applications".to_string(),
            content: "# Building Modern Web Applications with React and Node.js\n\n\
In today's rapidly evolving web development landscape, creating robust and scalable applications requires a solid understanding of modern technologies and best practices.\n\n\
## Getting Started with the MERN Stack\n\n\
The MERN stack has become one of the most popular choices for web development due to its flexibility and JavaScript-centric approach.\n\n\
### Frontend with React\n\n\
- **Components**: Reusable pieces of UI\n\
- **State Management**: Managing application state with hooks\n\
- **Routing**: Navigation between different views\n\n\
### Backend with Node.js\n\n\
- **Express.js**: Fast and minimalist web framework\n\
- **REST APIs**: Building scalable API endpoints\n\
- **Authentication**: JWT and session management\n\n\
## Conclusion\n\n\
Building modern web applications is an exciting journey that combines creativity with technical expertise."
                .to_string(),
            excerpt: "A comprehensive guide to building modern web applications using React and Node.js, covering best practices and the MERN stack.".to_string(),
            tags: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "Web Development".to_string(),
                "JavaScript".to_string(),
            ],
            published_at: "2024-01-15".to_string(),
            published: true,
            reading_time: 8,
        },
        BlogPost {
            id: "2".to_string(),
            title: "Mastering REST APIs and Database Design".to_string(),
            slug: "mastering-rest-apis-database-design".to_string(),
            content: "# Mastering REST APIs and Database Design\n\n\
Creating well-designed REST APIs and efficient database schemas is crucial for building scalable web applications.\n\n\
## REST API Design Principles\n\n\
### 1. Resource-Based URLs\n\
- Use nouns, not verbs: `/users` instead of `/getUsers`\n\
- Use plural nouns: `/users` instead of `/user`\n\n\
### 2. HTTP Methods\n\
- **GET**: Retrieve data\n\
- **POST**: Create new resources\n\
- **DELETE**: Remove resources\n\n\
## Database Design Best Practices\n\n\
Organize data to reduce redundancy and improve data integrity. Strategic indexing improves query performance.\n\n\
## Conclusion\n\n\
Focus on consistency, performance, and maintainability."
                .to_string(),
            excerpt: "Learn the fundamentals of REST API design and database architecture for building scalable backend systems.".to_string(),
            tags: vec![
                "API".to_string(),
                "Database".to_string(),
                "Backend".to_string(),
                "REST".to_string(),
            ],
            published_at: "2024-01-10".to_string(),
            published: true,
            reading_time: 6,
        },
        BlogPost {
            id: "3".to_string(),
            title: "Modern Authentication with JWT and Security Best Practices".to_string(),
            slug: "modern-authentication-jwt-security".to_string(),
            content: "# Modern Authentication with JWT and Security Best Practices\n\n\
Authentication is a critical component of modern web applications. This guide covers JSON Web Tokens and essential security practices.\n\n\
## Understanding JWT\n\n\
JSON Web Tokens are a compact, URL-safe means of representing claims between two parties:\n\n\
- **Header**: Token type and signing algorithm\n\
- **Payload**: Claims and user data\n\
- **Signature**: Verification signature\n\n\
## Implementation Best Practices\n\n\
- Use httpOnly cookies for web applications\n\
- Always use HTTPS in production\n\
- Implement rate limiting\n\
- Use environment variables for secrets\n\n\
## Conclusion\n\n\
Security should be considered from the beginning of development."
                .to_string(),
            excerpt: "A comprehensive guide to implementing secure authentication with JWT and protecting your applications from common vulnerabilities.".to_string(),
            tags: vec![
                "Authentication".to_string(),
                "Security".to_string(),
                "JWT".to_string(),
                "Web Security".to_string(),
            ],
            published_at: "2024-01-05".to_string(),
            published: true,
            reading_time: 10,
        },
    ]
}
