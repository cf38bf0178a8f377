/// Instructions for an agent calling the playbook tools. Shared by the
/// `playbook_guide` tool and the server's initialize instructions.
pub const PLAYBOOK_GUIDE: &str = "\
# Playbook Server Guide\n\
\n\
This server hands out curated templates (playbooks) for recurring work: writing product \
epics and user stories, structuring documentation, running code reviews, and reviewing \
epics and stories before they go to a team. Playbooks are read-only. Nothing you do here \
changes them.\n\
\n\
## Finding a playbook\n\
Call `list_playbooks` first. It returns every playbook with its id, name, one-line \
description and category, plus the set of categories. Pick the id that matches the user's \
task. If the user names a playbook loosely (\"the wiki one\", \"story template\"), map it to \
an id from this list rather than guessing.\n\
\n\
## Using a playbook\n\
Call `get_playbook` with the chosen id. The `template` field is the content to work from: \
titles with placeholders in [brackets], ordered sections, and for some playbooks an \
integration block describing which external tools to use and a validation checklist. The \
`usage_instructions` field tells you how to apply the template. The comprehensive wiki \
playbook also returns a `folder_structure` describing how to lay the documents out on disk.\n\
\n\
If the id is unknown the result carries an `error` field and `available_playbooks` with \
every valid id. Check for `error` before reading other fields, then retry with one of the \
listed ids.\n\
\n\
## Working with the user\n\
Ask for the details a template needs before filling it in: goals, personas, acceptance \
criteria, dependencies. Fill placeholders with the user's content and drop sections that do \
not apply. When a template describes an external system (Jira, a code-issues panel), those \
steps are instructions for you and your other tools. This server never calls them. Always \
confirm with the user before creating or editing anything in an external system.\n\
\n\
## Planning a feature\n\
`plan_feature` takes a feature description and optionally a project type (default \"web\") \
and complexity (default \"medium\"). It returns a five-phase skeleton (Requirements Analysis, \
Technical Design, Development, Testing, Deployment) and a short list of next actions. The \
skeleton is the same for every feature. Treat it as a checklist to adapt, not a finished plan.";
