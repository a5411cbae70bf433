//! The fixed set of trusted procedure invocations.

/// A trusted, preconfigured stored-procedure call.
///
/// Every variant maps 1:1 onto a fixed SQL statement. Callers pick a
/// variant; they never supply any part of the statement text, so there is
/// no injection surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Import staged payment rows into the finance tables.
    ImportPayments,
    /// Commit the prepared transfer.
    CommitTransfer,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 2] = [Operation::ImportPayments, Operation::CommitTransfer];

    /// The fixed statement executed for this operation.
    pub fn statement(self) -> &'static str {
        match self {
            Self::ImportPayments => "CALL fin.etl_import_payments()",
            Self::CommitTransfer => "CALL fin.commit_transfer()",
        }
    }

    /// Qualified procedure name, for diagnostics and logs.
    pub fn procedure(self) -> &'static str {
        match self {
            Self::ImportPayments => "fin.etl_import_payments",
            Self::CommitTransfer => "fin.commit_transfer",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImportPayments => write!(f, "import-payments"),
            Self::CommitTransfer => write!(f, "commit-transfer"),
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "import-payments" => Ok(Self::ImportPayments),
            "commit-transfer" => Ok(Self::CommitTransfer),
            other             => Err(format!("unknown operation: {other}")),
        }
    }
}
