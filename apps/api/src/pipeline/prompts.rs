// Template text for every prompt pipeline.
// Placeholders are `{dotted.path}` over the input's camelCase wire form.
// The required output shape is appended by `pipeline::build_prompt`.

/// Career suggestion. Input: `StudentProfile`.
pub const CAREER_SUGGESTION_TEMPLATE: &str = r#"You are an expert career counselor for Indian students. Your task is to provide highly personalized career recommendations based on a comprehensive user profile. Analyze all aspects of the profile to generate relevant suggestions, a match score for each, and a detailed rationale.

You must analyze the following user profile:

**1. Personal Information:**
*   Age: {personal.age}
*   Gender: {personal.gender}
*   Location: {personal.location} ({personal.locationType})
*   Languages: {personal.languages}

**2. Education Background:**
*   Level: {education.education}
*   Stream: {education.stream}
*   Board/University: {education.board}
*   Grades: {education.grades}
*   Learning Style: {education.learningStyle}

**3. Skills & Interests:**
*   Technical Skills: {skills.techSkills}
*   Soft Skills: {skills.softSkills}
*   Hobbies & Interests: {skills.hobbies}

**4. Aptitude, Personality & Goals:**
*   Aptitude Scores: Logical: {goals.logicalScore}%, Verbal: {goals.verbalScore}%, Creativity: {goals.creativityScore}%
*   Personality Type: {goals.personality}
*   Short-Term Goals: {goals.shortTermGoals}
*   Long-Term Goals: {goals.longTermGoals}
*   Preferred Work Style: {goals.workStyle}
*   Interested Industries: {goals.industries}

**Your Task:**

1.  **Analyze the Profile:** Carefully consider all the information provided. Weigh the importance of skills, interests, academic background, and personal goals.
2.  **Suggest 3-5 Career Paths:** Based on your analysis, suggest 3 to 5 highly relevant career paths for the student.
3.  **Calculate a Match Score:** For each suggestion, provide a matchScore between 0 and 100. A higher score indicates a better fit, based on a holistic view of all inputs.
4.  **Provide a Detailed Rationale:** Explain *why* these careers are recommended, connecting your reasoning directly to the profile: skills, hobbies and personality type."#;

/// Required skills for one career. Input: `{ careerName }`.
pub const CAREER_SKILLS_TEMPLATE: &str = r#"List the top 10 most important technical and soft skills required for a career in {careerName}.
Return only the list of skills."#;

/// Skills gap. Input: `SkillsGapInput`.
pub const SKILLS_GAP_TEMPLATE: &str = r#"You are a career advisor helping students identify skills gaps for their desired career paths.

A student with the following skills: {studentSkills}

is interested in the career path: {careerPathName} which requires the following skills: {careerPathSkills}.

Identify the skills that the student is missing and the skills that overlap. A skill belongs to exactly one of the two lists. Also, create a summary of the skills gap analysis, including the importance of the missing skills and how they can be acquired."#;

/// Learning roadmap. Input: `RoadmapInput`.
pub const ROADMAP_TEMPLATE: &str = r#"You are an AI career coach specializing in generating personalized learning roadmaps for Indian students.

Given the student's profile, suggested career paths, and skill gaps, generate a roadmap with actionable steps, descriptions, resources, and estimated time for each step. Order the steps as a sequential curriculum: the first step is what the student should do first.

Student Profile:
Demographics:
{studentProfile.demographics}
Interests: {studentProfile.interests}
Assessment Results:
{studentProfile.assessmentResults}
Skills: {studentProfile.skills}

Career Suggestions: {careerSuggestions}

Skill Gaps:
{skillGaps}"#;

/// Multilingual chatbot. Input: `ChatbotInput`.
pub const CHATBOT_TEMPLATE: &str = r#"You are a helpful multilingual chatbot assisting Indian students with career guidance and support.

The student will ask a question in {language}, and you should respond in the same language.

Student Query: {query}"#;
