//! Root application component: contexts, routing, and the signed-in shell.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::{ProtectedRoute, PublicOnlyRoute};
use crate::components::sidebar::AppSidebar;
use crate::components::toaster::Toaster;
use crate::pages::auth::AuthPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::event_create::CreateEventPage;
use crate::pages::event_edit::EditEventPage;
use crate::pages::events::EventsPage;
use crate::pages::job_create::CreateJobPage;
use crate::pages::job_edit::EditJobPage;
use crate::pages::jobs::JobsPage;
use crate::pages::landing::LandingPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::placeholder::PlaceholderPage;
use crate::pages::professional_create::CreateProfessionalPage;
use crate::pages::professional_edit::EditProfessionalPage;
use crate::pages::professionals::ProfessionalsPage;
use crate::pages::profile::ProfilePage;
use crate::state::session::SessionStore;
use crate::state::toasts::ToastsState;

/// Root component. Provides the session store and toast state, kicks off
/// session restore, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new();
    provide_context(store);
    provide_context(RwSignal::new(ToastsState::default()));

    // Restore a persisted session before the guards settle.
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(store.initialize());

    view! {
        <Title text="EventaJob"/>
        <Toaster/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route
                    path=StaticSegment("auth")
                    view=|| {
                        view! {
                            <PublicOnlyRoute>
                                <AuthPage/>
                            </PublicOnlyRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <Workspace>
                                <DashboardPage/>
                            </Workspace>
                        }
                    }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| {
                        view! {
                            <Workspace>
                                <ProfilePage/>
                            </Workspace>
                        }
                    }
                />
                <Route
                    path=StaticSegment("events")
                    view=|| {
                        view! {
                            <Workspace>
                                <EventsPage/>
                            </Workspace>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("events"), StaticSegment("create"))
                    view=|| {
                        view! {
                            <Workspace>
                                <CreateEventPage/>
                            </Workspace>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("events"), StaticSegment("edit"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <Workspace>
                                <EditEventPage/>
                            </Workspace>
                        }
                    }
                />
                <Route
                    path=StaticSegment("professionals")
                    view=|| {
                        view! {
                            <Workspace>
                                <ProfessionalsPage/>
                            </Workspace>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("professionals"), StaticSegment("create"))
                    view=|| {
                        view! {
                            <Workspace>
                                <CreateProfessionalPage/>
                            </Workspace>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("professionals"), StaticSegment("edit"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <Workspace>
                                <EditProfessionalPage/>
                            </Workspace>
                        }
                    }
                />
                <Route
                    path=StaticSegment("jobs")
                    view=|| {
                        view! {
                            <Workspace>
                                <JobsPage/>
                            </Workspace>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("jobs"), StaticSegment("create"))
                    view=|| {
                        view! {
                            <Workspace>
                                <CreateJobPage/>
                            </Workspace>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("jobs"), StaticSegment("edit"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <Workspace>
                                <EditJobPage/>
                            </Workspace>
                        }
                    }
                />
                <Route
                    path=StaticSegment("reviews")
                    view=|| {
                        view! {
                            <Workspace>
                                <PlaceholderPage
                                    title="Avaliações"
                                    description="Veja avaliações e feedback."
                                />
                            </Workspace>
                        }
                    }
                />
                <Route
                    path=StaticSegment("notifications")
                    view=|| {
                        view! {
                            <Workspace>
                                <PlaceholderPage
                                    title="Notificações"
                                    description="Gerencie suas notificações."
                                />
                            </Workspace>
                        }
                    }
                />
                <Route
                    path=StaticSegment("reports")
                    view=|| {
                        view! {
                            <Workspace>
                                <PlaceholderPage
                                    title="Relatórios"
                                    description="Visualize relatórios e análises."
                                />
                            </Workspace>
                        }
                    }
                />
                <Route
                    path=StaticSegment("settings")
                    view=|| {
                        view! {
                            <Workspace>
                                <PlaceholderPage
                                    title="Configurações"
                                    description="Configure sua conta e preferências."
                                />
                            </Workspace>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

/// Guard plus the signed-in shell: sidebar on the left, scrolling page
/// content on the right. Every authenticated route renders inside this.
#[component]
fn Workspace(children: ChildrenFn) -> impl IntoView {
    view! {
        <ProtectedRoute>
            <div class="shell">
                <AppSidebar/>
                <main class="shell__main">{children()}</main>
            </div>
        </ProtectedRoute>
    }
}
