// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Debug;

pub trait Sink: Debug + Send + Sync {
    /**
        Writes one rendered record to this destination.

        The line does not include a trailing newline; the sink appends its own
        record separator.  Implementations must serialize concurrent callers
        internally so a record always lands whole, and must swallow write
        failures: one sink failing is never allowed to disturb delivery to the
        others or to surface to the emitting caller.
    */
    fn write_line(&self, line: &str);

    /**
    Pushes any buffered records down to the underlying destination.

    Unbuffered sinks may implement this as a no-op.
    */
    fn flush(&self);
}

/*
Boilerplate notes.

# Sink

Clone on Sink makes no sense; sinks own unique resources (a file handle, a
rotation state) that must not be duplicated.
PartialEq/Eq are unclear: data equality vs. provenance.  Avoided.
Ord makes no sense.
Default is not sensible since sink construction may need a path and may fail.
Send/Sync are required: the facade is invoked from arbitrary threads and the
sink set is shared behind Arc.
*/
