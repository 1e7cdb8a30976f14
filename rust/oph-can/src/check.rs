use crate::{Action, Denial, NotAuthorized, Registry, Resource, Subject};

impl Registry {
    /// Check whether `subject` may perform `action` on `resource`.
    ///
    /// A missing subject is always denied. Otherwise the abilities registered
    /// for the subject's role are consulted for `action` and for every action
    /// that implies it (see [`Action::candidates`]). An ability whose scope
    /// covers the resource type allows the operation, unless it is owner-only
    /// and the resource is not owned by the subject; such an ability grants
    /// nothing and the remaining abilities are still considered.
    pub fn check<R>(
        &self,
        action: Action,
        resource: &R,
        subject: Option<&dyn Subject>,
    ) -> Result<(), NotAuthorized>
    where
        R: Resource + ?Sized,
    {
        let resource_type = resource.resource_id();

        let Some(subject) = subject else {
            tracing::debug!(%action, resource = resource_type, "Denied without subject");
            return Err(NotAuthorized::new(action, resource_type, Denial::NoSubject));
        };

        let role = subject.role_id();
        let mut owner_only = false;

        for candidate in action.candidates() {
            let coverage = self.coverage(role, *candidate, resource_type);
            if coverage.unrestricted {
                tracing::trace!(
                    %role,
                    %action,
                    resource = resource_type,
                    via = %candidate,
                    "Allowed"
                );
                return Ok(());
            }
            owner_only |= coverage.owner_only;
        }

        if owner_only && resource.owned_by(subject.user_id()) {
            tracing::trace!(%role, %action, resource = resource_type, "Allowed for owner");
            return Ok(());
        }

        tracing::debug!(%role, %action, resource = resource_type, "Denied");
        Err(NotAuthorized::new(
            action,
            resource_type,
            Denial::NoAbility { role },
        ))
    }

    /// Same as [`Registry::check`], answering with a plain boolean.
    pub fn allows<R>(&self, action: Action, resource: &R, subject: Option<&dyn Subject>) -> bool
    where
        R: Resource + ?Sized,
    {
        self.check(action, resource, subject).is_ok()
    }

    /// Check [`Action::Show`].
    pub fn show<R>(&self, resource: &R, subject: Option<&dyn Subject>) -> Result<(), NotAuthorized>
    where
        R: Resource + ?Sized,
    {
        self.check(Action::Show, resource, subject)
    }

    /// Check [`Action::List`].
    pub fn list<R>(&self, resource: &R, subject: Option<&dyn Subject>) -> Result<(), NotAuthorized>
    where
        R: Resource + ?Sized,
    {
        self.check(Action::List, resource, subject)
    }

    /// Check [`Action::Create`].
    pub fn create<R>(
        &self,
        resource: &R,
        subject: Option<&dyn Subject>,
    ) -> Result<(), NotAuthorized>
    where
        R: Resource + ?Sized,
    {
        self.check(Action::Create, resource, subject)
    }

    /// Check [`Action::Update`].
    pub fn update<R>(
        &self,
        resource: &R,
        subject: Option<&dyn Subject>,
    ) -> Result<(), NotAuthorized>
    where
        R: Resource + ?Sized,
    {
        self.check(Action::Update, resource, subject)
    }

    /// Check [`Action::Destroy`].
    pub fn destroy<R>(
        &self,
        resource: &R,
        subject: Option<&dyn Subject>,
    ) -> Result<(), NotAuthorized>
    where
        R: Resource + ?Sized,
    {
        self.check(Action::Destroy, resource, subject)
    }

    /// Check [`Action::Manage`], i.e. full control over this instance.
    ///
    /// Only `Manage` abilities satisfy this check.
    pub fn manage<R>(
        &self,
        resource: &R,
        subject: Option<&dyn Subject>,
    ) -> Result<(), NotAuthorized>
    where
        R: Resource + ?Sized,
    {
        self.check(Action::Manage, resource, subject)
    }
}
