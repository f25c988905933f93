use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use chrono::{DateTime, Utc};

use super::{
    ContactError, ContactForm, Feedback, FeedbackTicket, Field, FormFields, Mailer, Timer,
    FEEDBACK_TIMEOUT,
};

type Listener = Rc<dyn Fn(&ContactForm)>;

struct Inner<H> {
    form: ContactForm,
    pending_revert: Option<H>,
    listener: Option<Listener>,
}

/// Drives the contact form: field edits, one submission at a time, and the
/// feedback that clears itself after [`FEEDBACK_TIMEOUT`].
///
/// State is single-threaded and shared between clones, so a clone can be moved
/// into an event handler while another awaits a submission.
pub struct ContactFormController<M, T: Timer> {
    inner: Rc<RefCell<Inner<T::Handle>>>,
    mailer: Rc<M>,
    timer: Rc<T>,
    feedback_timeout: Duration,
    clock: fn() -> DateTime<Utc>,
}

impl<M, T: Timer> Clone for ContactFormController<M, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            mailer: Rc::clone(&self.mailer),
            timer: Rc::clone(&self.timer),
            feedback_timeout: self.feedback_timeout,
            clock: self.clock,
        }
    }
}

impl<M, T> ContactFormController<M, T>
where
    M: Mailer,
    T: Timer,
    T::Handle: 'static,
{
    pub fn new(mailer: M, timer: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                form: ContactForm::new(),
                pending_revert: None,
                listener: None,
            })),
            mailer: Rc::new(mailer),
            timer: Rc::new(timer),
            feedback_timeout: FEEDBACK_TIMEOUT,
            clock: Utc::now,
        }
    }

    pub fn with_feedback_timeout(mut self, timeout: Duration) -> Self {
        self.feedback_timeout = timeout;
        self
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Called with a snapshot of the form after every change.
    pub fn on_change(&self, listener: impl Fn(&ContactForm) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn fields(&self) -> FormFields {
        self.inner.borrow().form.fields().clone()
    }

    pub fn feedback(&self) -> Feedback {
        self.inner.borrow().form.feedback()
    }

    pub fn is_submitting(&self) -> bool {
        self.inner.borrow().form.is_submitting()
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        self.inner.borrow_mut().form.update_field(field, value);
        notify(&self.inner);
    }

    /// Validates and sends the form, returning the feedback it produced.
    ///
    /// Every failure ends in [`Feedback::Error`]. A call made while a previous
    /// submission is still in flight does nothing.
    pub async fn submit(&self) -> Feedback {
        let prepared = {
            let mut inner = self.inner.borrow_mut();
            if inner.form.is_submitting() {
                log::debug!("submission already in flight, ignoring");
                return inner.form.feedback();
            }
            inner.form.prepare((self.clock)())
        };

        let outcome = match prepared {
            Ok(payload) => {
                let in_flight = InFlight::start(&self.inner);
                log::debug!("submitting contact form: {payload:?}");
                let res = self.mailer.send(&payload).await;
                drop(in_flight);
                res
            }
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            log::warn!("contact form submission failed: {e}");
        }
        self.settle(outcome)
    }

    fn settle(&self, outcome: Result<(), ContactError>) -> Feedback {
        let (ticket, feedback) = {
            let mut inner = self.inner.borrow_mut();
            let ticket = inner.form.resolve(&outcome);
            (ticket, inner.form.feedback())
        };
        self.schedule_revert(ticket);
        notify(&self.inner);
        feedback
    }

    fn schedule_revert(&self, ticket: FeedbackTicket) {
        let weak = Rc::downgrade(&self.inner);
        let handle = self
            .timer
            .schedule(self.feedback_timeout, move || revert(&weak, ticket));
        let previous = std::mem::replace(&mut self.inner.borrow_mut().pending_revert, handle);
        if let Some(previous) = previous {
            self.timer.cancel(previous);
        }
    }
}

/// Marks the form as submitting until dropped, including when the submit
/// future itself is dropped mid-request.
struct InFlight<'a, H>(&'a Rc<RefCell<Inner<H>>>);

impl<'a, H> InFlight<'a, H> {
    fn start(inner: &'a Rc<RefCell<Inner<H>>>) -> Self {
        inner.borrow_mut().form.set_submitting(true);
        notify(inner);
        Self(inner)
    }
}

impl<H> Drop for InFlight<'_, H> {
    fn drop(&mut self) {
        self.0.borrow_mut().form.set_submitting(false);
        notify(self.0);
    }
}

fn revert<H>(inner: &Weak<RefCell<Inner<H>>>, ticket: FeedbackTicket) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let reverted = {
        let mut inner = inner.borrow_mut();
        let reverted = inner.form.expire(ticket);
        if reverted {
            inner.pending_revert = None;
        }
        reverted
    };
    if reverted {
        notify(&inner);
    }
}

fn notify<H>(inner: &Rc<RefCell<Inner<H>>>) {
    let (listener, snapshot) = {
        let inner = inner.borrow();
        match &inner.listener {
            Some(listener) => (Rc::clone(listener), inner.form.clone()),
            None => return,
        }
    };
    listener(&snapshot);
}
