use crate::element::SerializedElement;

/// Tag name of every action definition element.
pub const ACTION_DEFINITION_ELEMENT: &str = "action-definition";
/// Child element naming the component that executes an action.
pub const COMPONENT_NAME_ELEMENT: &str = "component-name";
/// Child element holding component-specific settings.
pub const COMPONENT_DEF_ELEMENT: &str = "component-definition";

pub const JOB_SCHEDULER_COMPONENT: &str = "org.pentaho.component.JobSchedulerComponent";
pub const JOB_SCHEDULER_COMPONENT_SHORT: &str = "JobSchedulerComponent";

/// Element under `component-definition` carrying the scheduler command.
pub const JOB_ACTION_ELEMENT: &str = "jobAction";
/// Input naming the scheduled job a command acts on.
pub const JOB_NAME_ELEMENT: &str = "jobName";

pub(crate) const JOB_ACTION_PATH: &str = "component-definition/jobAction";

/// Family-level shape shared by every job scheduler action.
///
/// The element must be an action definition whose component name is the job
/// scheduler component, written either fully qualified or unqualified.
pub fn is_job_scheduler_action<E: SerializedElement>(element: &E) -> bool {
    element.name() == ACTION_DEFINITION_ELEMENT
        && element.child(COMPONENT_NAME_ELEMENT).is_some_and(|component| {
            component.text_equals(JOB_SCHEDULER_COMPONENT)
                || component.text_equals(JOB_SCHEDULER_COMPONENT_SHORT)
        })
}

/// Defines the scheduler command catalog: the command constants, the
/// `ActionKind` enum and its per-variant tables.
macro_rules! define_action_variants {
    ( $( ($variant:ident, $const_name:ident, $command:expr, [$($input:expr),*], $doc:literal) ),* $(,)? ) => {
        $(
            #[doc = concat!("Command identifier of [`ActionKind::", stringify!($variant), "`].")]
            pub const $const_name: &str = $command;
        )*

        /// The closed set of action variants this crate can recognize.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ActionKind {
            $(
                #[doc = $doc]
                $variant,
            )*
        }

        impl ActionKind {
            /// Every variant, in default registration order.
            pub const ALL: &'static [ActionKind] = &[ $( ActionKind::$variant, )* ];

            /// The wire-level discriminator persisted under `component-definition/jobAction`.
            pub fn command_id(self) -> &'static str {
                match self {
                    $( ActionKind::$variant => $const_name, )*
                }
            }

            /// Inputs this variant consumes internally and which document authors
            /// must not redefine.
            pub fn reserved_input_names(self) -> &'static [&'static str] {
                match self {
                    $( ActionKind::$variant => &[ $( $input ),* ], )*
                }
            }
        }
    };
}

define_action_variants! {
    (SuspendScheduledJob, SUSPEND_JOB_COMMAND, "suspendJob", [JOB_NAME_ELEMENT], "Suspends a single scheduled job."),
    (ResumeScheduledJob, RESUME_JOB_COMMAND, "resumeJob", [JOB_NAME_ELEMENT], "Resumes a suspended scheduled job."),
    (DeleteScheduledJob, DELETE_JOB_COMMAND, "deleteJob", [JOB_NAME_ELEMENT], "Removes a scheduled job."),
    (SuspendScheduler, SUSPEND_SCHEDULER_COMMAND, "suspendScheduler", [], "Pauses the whole scheduler."),
    (ResumeScheduler, RESUME_SCHEDULER_COMMAND, "resumeScheduler", [], "Resumes the whole scheduler."),
}

impl ActionKind {
    /// Structural recognizer for this variant.
    ///
    /// Returns `false` for any element that is not a job scheduler action, that
    /// lacks `component-definition/jobAction`, or whose command text differs.
    pub fn accepts<E: SerializedElement>(self, element: &E) -> bool {
        if !is_job_scheduler_action(element) {
            return false;
        }
        element
            .select_single_node(JOB_ACTION_PATH)
            .is_some_and(|job_action| job_action.text_equals(self.command_id()))
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command_id())
    }
}
